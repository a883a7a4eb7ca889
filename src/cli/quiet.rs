//! Process-wide quiet flag for CLI messages.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// True when informational messages and warnings should be suppressed.
pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdout is a tty
pub fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(1) == 1 }
}
