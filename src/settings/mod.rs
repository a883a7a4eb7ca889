//! Persistent CLI defaults.

mod file;

/// Defaults applied before command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: isize,
    pub no_symbols: bool,
    pub clipboard: bool,
}

impl Settings {
    /// Load from the settings file. A missing file yields the defaults.
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&file::get_path(), &mut settings)?;
        Ok(settings)
    }

    /// Write to the settings file, returning its path.
    pub fn save_to_file(&self) -> Result<String, std::io::Error> {
        let path = file::get_path();
        file::save(&path, self)?;
        Ok(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 25,
            no_symbols: false,
            clipboard: false,
        }
    }
}
