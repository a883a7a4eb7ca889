//! Exit handling: signal handlers and failure exits.

use crate::cli::prompts;

/// Status for a run interrupted by SIGINT/SIGTERM/SIGHUP.
pub const INTERRUPTED: i32 = 130;

/// Status for any generation, argument or output failure.
pub const FAILURE: i32 = 1;

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit without unwinding
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(INTERRUPTED) }
}

/// Install signal handlers and keep password memory out of core dumps.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);

        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Print `msg` as an error and exit with [`FAILURE`].
pub fn fail(msg: &str) -> ! {
    log::debug!("exiting with status {FAILURE}");
    prompts::error(msg);
    std::process::exit(FAILURE)
}
