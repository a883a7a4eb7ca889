//! Centralized warning and status messages for CLI output.

use crossterm::style::Stylize;

use super::quiet;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print clipboard copied confirmation to stderr - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("{}", "*** -COPIED TO CLIPBOARD- ***".green());
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
