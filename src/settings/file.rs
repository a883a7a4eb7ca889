//! Settings file persistence.
//!
//! One line: `length,no_symbols,clipboard`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

use log::{debug, warn};

use super::Settings;

pub fn save(path: &str, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{}\n",
        settings.length, settings.no_symbols, settings.clipboard
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(path: &str, settings: &mut Settings) -> std::io::Result<()> {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no settings file at {path}, using defaults");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != 3 {
        warn!("ignoring malformed settings file {path}");
        return Ok(());
    }

    settings.length = parts[0].parse().unwrap_or(settings.length);
    settings.no_symbols = parts[1].parse().unwrap_or(settings.no_symbols);
    settings.clipboard = parts[2].parse().unwrap_or(settings.clipboard);

    Ok(())
}

#[inline]
pub fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/randpw/settings", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        let dir = env::temp_dir().join(format!("randpw-test-{}-{}", std::process::id(), name));
        dir.join("settings").display().to_string()
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let saved = Settings {
            length: 40,
            no_symbols: true,
            clipboard: false,
        };
        save(&path, &saved).unwrap();

        let mut loaded = Settings::default();
        load(&path, &mut loaded).unwrap();
        assert_eq!(loaded, saved);

        let _ = std::fs::remove_dir_all(Path::new(&path).parent().unwrap());
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut settings = Settings::default();
        load(&temp_path("missing"), &mut settings).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn bad_fields_fall_back_individually() {
        let path = temp_path("partial");
        std::fs::create_dir_all(Path::new(&path).parent().unwrap()).unwrap();
        std::fs::write(&path, "abc,true,maybe\n").unwrap();

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();
        assert_eq!(settings.length, 25);
        assert!(settings.no_symbols);
        assert!(!settings.clipboard);

        let _ = std::fs::remove_dir_all(Path::new(&path).parent().unwrap());
    }
}
