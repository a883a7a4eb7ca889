mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::parse;

/// Parse `args`, generate, and deliver the password. Exits non-zero on failure.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => crate::exits::fail(&e),
    };

    if let Err(Done::Failed(msg)) = ctx.run() {
        crate::exits::fail(&msg);
    }
}
