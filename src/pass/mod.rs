//! Password generation.

pub mod charset;
mod error;
mod generate;

use std::sync::LazyLock;

pub use charset::CharSet;
pub use error::{CharClass, Error, Result};
pub use generate::{Generator, Password};

/// Shared generator with the built-in classes, built on first use.
static DEFAULT: LazyLock<Generator> = LazyLock::new(Generator::default);

/// [`Generator::generate`] on the built-in character classes.
pub fn generate(
    num_lower: isize,
    num_upper: isize,
    num_digits: isize,
    num_symbols: isize,
) -> Result<Password> {
    DEFAULT.generate(num_lower, num_upper, num_digits, num_symbols)
}

/// [`Generator::generate_length`] on the built-in character classes.
pub fn generate_length(length: isize) -> Result<Password> {
    DEFAULT.generate_length(length)
}
