use std::fmt;

/// One of the four character classes a generator is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// Reasons a password could not be generated. None of them are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot generate a negative number of characters of a class")]
    NegativeCount,

    #[error("{0} requested but the {0} character set is empty")]
    ClassUnavailable(CharClass),

    #[error("cannot generate a password of negative length")]
    NegativeLength,

    #[error("password length requested but every character class is empty")]
    EmptyPool,

    #[error("requested password is too long to allocate")]
    TooLong,

    #[error("secure random source failed: {0}")]
    EntropySourceFailure(#[from] getrandom::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_unavailable_names_the_class() {
        let msg = Error::ClassUnavailable(CharClass::Symbols).to_string();
        assert_eq!(
            msg,
            "symbols requested but the symbols character set is empty"
        );
    }

    #[test]
    fn entropy_errors_convert() {
        let err: Error = getrandom::Error::UNSUPPORTED.into();
        assert_eq!(err, Error::EntropySourceFailure(getrandom::Error::UNSUPPORTED));
    }
}
