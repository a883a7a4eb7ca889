//! Character classes a generator draws from.

/// ASCII lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII decimal digits.
pub const DIGITS: &str = "0123456789";
/// All 32 ASCII punctuation characters.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A custom set of character classes.
///
/// An empty class is disabled: requesting characters from it is an error,
/// it is never replaced by the built-in default.
///
/// Classes are expected not to share characters. This is not checked; when
/// they overlap, a character in the output cannot be attributed to one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    pub lowercase: String,
    pub uppercase: String,
    pub digits: String,
    pub symbols: String,
}

impl CharSet {
    /// The built-in classes with symbols disabled.
    pub fn without_symbols() -> Self {
        Self {
            symbols: String::new(),
            ..Self::default()
        }
    }

    /// An all-empty set. Fields can then be filled selectively.
    pub fn empty() -> Self {
        Self {
            lowercase: String::new(),
            uppercase: String::new(),
            digits: String::new(),
            symbols: String::new(),
        }
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self {
            lowercase: LOWERCASE.to_string(),
            uppercase: UPPERCASE.to_string(),
            digits: DIGITS.to_string(),
            symbols: SYMBOLS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn without_symbols_keeps_other_classes() {
        let set = CharSet::without_symbols();
        assert!(set.symbols.is_empty());
        assert_eq!(set.lowercase, LOWERCASE);
        assert_eq!(set.digits, DIGITS);
    }
}
