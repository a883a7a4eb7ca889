//! Cryptographically secure password generation.
//!
//! Passwords are built either from exact per-class counts, shuffled so the
//! classes do not appear in blocks, or from a total length drawn uniformly
//! from every configured class. All randomness comes from the OS CSPRNG.
//!
//! ```no_run
//! let pass = randpw::generate(8, 8, 4, 4)?;
//! assert_eq!(pass.len(), 24);
//!
//! let pin = randpw::Generator::new(Some(randpw::CharSet {
//!     digits: randpw::charset::DIGITS.into(),
//!     ..randpw::CharSet::empty()
//! }))
//! .generate_length(6)?;
//! assert_eq!(pin.len(), 6);
//! # Ok::<(), randpw::Error>(())
//! ```

pub mod pass;
pub mod rand;

pub use pass::{
    CharClass, CharSet, Error, Generator, Password, Result, charset, generate, generate_length,
};
