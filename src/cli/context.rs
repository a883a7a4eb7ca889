//! CLI context - bundles settings, flags, and the generator call.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use randpw::{CharSet, Generator, Password};
use zeroize::Zeroize;

use super::{CliFlags, print_help, prompts, quiet};
use crate::settings::Settings;

/// Why the CLI stopped before or instead of completing normally.
#[derive(Debug, PartialEq, Eq)]
pub enum Done {
    /// Nothing left to do (help, version). Exit 0.
    Early,
    /// Report the message and exit non-zero.
    Failed(String),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;
        // Before loading settings, so -q also silences load warnings.
        quiet::set(flags.quiet);

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Ok(Self { settings, flags })
    }

    /// Run CLI. Returns `Err(Done::Early)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.handle_save();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done::Early);
        }
        if self.flags.version {
            println!("randpw {}", env!("CARGO_PKG_VERSION"));
            return Err(Done::Early);
        }
        Ok(())
    }

    /// Apply CLI flags on top of the loaded settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if self.flags.no_symbols {
            self.settings.no_symbols = true;
        }
        if self.flags.clip {
            self.settings.clipboard = true;
        }
        debug!("effective settings: {:?}", self.settings);
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(path) => prompts::settings_saved(&path),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    /// The generator the current settings call for.
    pub fn generator(&self) -> Generator {
        if self.settings.no_symbols {
            Generator::new(Some(CharSet::without_symbols()))
        } else {
            Generator::default()
        }
    }

    /// Generate the password and deliver it to the clipboard or stdout.
    pub fn generate_output(&mut self) -> Result<(), Done> {
        let pass = self
            .generator()
            .generate_length(self.settings.length)
            .map_err(|e| Done::Failed(e.to_string()))?;

        if self.settings.clipboard {
            to_clipboard(&pass)
        } else {
            to_stdout(&pass)
        }
    }
}

fn to_clipboard(pass: &Password) -> Result<(), Done> {
    let mut ctx = ClipboardContext::new()
        .map_err(|e| Done::Failed(format!("Clipboard unavailable: {}", e)))?;

    ctx.set_contents(pass.as_str().to_owned())
        .map_err(|e| Done::Failed(format!("Clipboard error: {}", e)))?;

    // Some providers hand back a copy; wipe it.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    prompts::clipboard_copied();
    Ok(())
}

fn to_stdout(pass: &Password) -> Result<(), Done> {
    let stdout = std::io::stdout();
    write_password(&mut stdout.lock(), pass, quiet::stdout_is_terminal())
        .map_err(|e| Done::Failed(format!("Failed to write password: {}", e)))
}

/// Terminals get a trailing newline, pipes get the bare password.
fn write_password<W: Write>(out: &mut W, pass: &str, newline: bool) -> std::io::Result<()> {
    out.write_all(pass.as_bytes())?;
    if newline {
        out.write_all(b"\n")?;
    }
    out.flush()
}
