use std::env;

mod cli;
mod exits;
mod settings;

fn main() {
    exits::install_handlers();
    init_logging();

    let args: Vec<String> = env::args().collect();
    cli::run(args);
}

/// Diagnostics go to stderr; stdout carries only the password.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RANDPW_LOG", "warn"))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
