//! Password generation.

use log::{debug, trace};
use zeroize::Zeroizing;

use super::charset::CharSet;
use super::error::{CharClass, Error, Result};
use crate::rand::{Entropy, OsEntropy, insert_random, uniform_index};

/// A generated password. The buffer is wiped when dropped.
pub type Password = Zeroizing<String>;

/// Generates cryptographically secure passwords from a fixed set of character classes.
///
/// Immutable after construction, so one instance can serve any number of
/// calls from any number of threads.
#[derive(Debug, Clone)]
pub struct Generator {
    lowercase: Vec<char>,
    uppercase: Vec<char>,
    digits: Vec<char>,
    symbols: Vec<char>,
    pool: Vec<char>,
}

impl Generator {
    /// Builds a generator from `charset`, or from the built-in classes when `None`.
    ///
    /// Defaults apply to the whole set only. A supplied set with an empty
    /// class keeps that class disabled.
    pub fn new(charset: Option<CharSet>) -> Self {
        let charset = charset.unwrap_or_default();

        let lowercase: Vec<char> = charset.lowercase.chars().collect();
        let uppercase: Vec<char> = charset.uppercase.chars().collect();
        let digits: Vec<char> = charset.digits.chars().collect();
        let symbols: Vec<char> = charset.symbols.chars().collect();

        let mut pool =
            Vec::with_capacity(lowercase.len() + uppercase.len() + digits.len() + symbols.len());
        pool.extend(&lowercase);
        pool.extend(&uppercase);
        pool.extend(&digits);
        pool.extend(&symbols);

        debug!(
            "generator: lowercase={} uppercase={} digits={} symbols={} pool={}",
            lowercase.len(),
            uppercase.len(),
            digits.len(),
            symbols.len(),
            pool.len()
        );

        Self {
            lowercase,
            uppercase,
            digits,
            symbols,
            pool,
        }
    }

    /// Generates a password with exactly the requested number of characters
    /// from each class, arranged in uniformly random order.
    pub fn generate(
        &self,
        num_lower: isize,
        num_upper: isize,
        num_digits: isize,
        num_symbols: isize,
    ) -> Result<Password> {
        self.generate_with(&mut OsEntropy, [num_lower, num_upper, num_digits, num_symbols])
    }

    /// Generates a password of `length` characters drawn independently from the whole pool.
    pub fn generate_length(&self, length: isize) -> Result<Password> {
        self.generate_length_with(&mut OsEntropy, length)
    }

    /// Size of the combined pool.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    fn classes(&self) -> [(CharClass, &[char]); 4] {
        [
            (CharClass::Lowercase, self.lowercase.as_slice()),
            (CharClass::Uppercase, self.uppercase.as_slice()),
            (CharClass::Digits, self.digits.as_slice()),
            (CharClass::Symbols, self.symbols.as_slice()),
        ]
    }

    pub(crate) fn generate_with<E: Entropy>(
        &self,
        src: &mut E,
        counts: [isize; 4],
    ) -> Result<Password> {
        if counts.iter().any(|&n| n < 0) {
            return Err(Error::NegativeCount);
        }

        let classes = self.classes();
        for ((class, chars), &n) in classes.iter().zip(&counts) {
            if n > 0 && chars.is_empty() {
                return Err(Error::ClassUnavailable(*class));
            }
        }

        // Non-negative after the check above.
        let total = counts
            .iter()
            .try_fold(0usize, |acc, &n| acc.checked_add(n as usize))
            .ok_or(Error::TooLong)?;
        trace!("generate: {total} chars by class");
        if total == 0 {
            return Ok(Password::new(String::new()));
        }

        let mut buf = work_buffer(total)?;
        for ((_, chars), &n) in classes.iter().zip(&counts) {
            for _ in 0..n {
                let c = chars[uniform_index(src, chars.len())?];
                insert_random(src, &mut buf, c)?;
            }
        }

        Ok(collect(&buf))
    }

    pub(crate) fn generate_length_with<E: Entropy>(
        &self,
        src: &mut E,
        length: isize,
    ) -> Result<Password> {
        if length < 0 {
            return Err(Error::NegativeLength);
        }
        if length == 0 {
            return Ok(Password::new(String::new()));
        }
        if self.pool.is_empty() {
            return Err(Error::EmptyPool);
        }

        let length = length as usize;
        trace!("generate_length: {length} chars from pool of {}", self.pool.len());

        let mut buf = work_buffer(length)?;
        for _ in 0..length {
            buf.push(self.pool[uniform_index(src, self.pool.len())?]);
        }

        Ok(collect(&buf))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// A wiped-on-drop buffer for `len` chars, allocated once up front.
fn work_buffer(len: usize) -> Result<Zeroizing<Vec<char>>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| Error::TooLong)?;
    Ok(Zeroizing::new(buf))
}

/// Copies `chars` into a password sized up front so the string never reallocates.
fn collect(chars: &[char]) -> Password {
    let bytes = chars.iter().map(|c| c.len_utf8()).sum();
    let mut pass = Password::new(String::with_capacity(bytes));
    pass.extend(chars);
    pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::scripted::Scripted;

    fn abc() -> Generator {
        Generator::new(Some(CharSet {
            lowercase: "abc".into(),
            uppercase: "XYZ".into(),
            digits: String::new(),
            symbols: String::new(),
        }))
    }

    #[test]
    fn pool_follows_class_order() {
        assert_eq!(abc().pool, ['a', 'b', 'c', 'X', 'Y', 'Z']);
        assert_eq!(Generator::default().pool_len(), 94);
    }

    #[test]
    fn scripted_composition_is_exact() {
        // draw 'b', insert at 0; draw 'Z', insert at 0 -> "Zb"
        let mut src = Scripted::new(&[1, 0, 2, 0]);
        let pass = abc().generate_with(&mut src, [1, 1, 0, 0]).unwrap();
        assert_eq!(pass.as_str(), "Zb");
        assert_eq!(src.drawn, 4);
    }

    #[test]
    fn scripted_length_draws_from_pool() {
        // 2^64 mod 6 == 4, so every word here is accepted.
        let mut src = Scripted::new(&[6, 5, 9]);
        let pass = abc().generate_length_with(&mut src, 3).unwrap();
        assert_eq!(pass.as_str(), "aZX");
    }

    #[test]
    fn entropy_failure_aborts_composition() {
        let mut src = Scripted::new(&[0, 0]);
        let err = abc().generate_with(&mut src, [2, 0, 0, 0]).unwrap_err();
        assert_eq!(err, Error::EntropySourceFailure(getrandom::Error::UNSUPPORTED));
    }

    #[test]
    fn entropy_failure_aborts_length() {
        let mut src = Scripted::new(&[]);
        let err = abc().generate_length_with(&mut src, 1).unwrap_err();
        assert_eq!(err, Error::EntropySourceFailure(getrandom::Error::UNSUPPORTED));
    }

    #[test]
    fn validation_happens_before_drawing() {
        let mut src = Scripted::new(&[]);
        assert_eq!(
            abc().generate_with(&mut src, [1, 0, -1, 0]).unwrap_err(),
            Error::NegativeCount
        );
        assert_eq!(
            abc().generate_with(&mut src, [0, 0, 1, 0]).unwrap_err(),
            Error::ClassUnavailable(CharClass::Digits)
        );
        assert_eq!(src.drawn, 0);
    }

    #[test]
    fn oversized_requests_fail_before_drawing() {
        let mut src = Scripted::new(&[]);
        let g = Generator::default();
        assert_eq!(
            g.generate_with(&mut src, [isize::MAX, isize::MAX, isize::MAX, 1])
                .unwrap_err(),
            Error::TooLong
        );
        assert_eq!(
            g.generate_length_with(&mut src, isize::MAX).unwrap_err(),
            Error::TooLong
        );
        assert_eq!(src.drawn, 0);
    }

    #[test]
    fn multibyte_classes_draw_whole_chars() {
        let g = Generator::new(Some(CharSet {
            lowercase: "äöü".into(),
            ..CharSet::empty()
        }));
        let pass = g.generate(5, 0, 0, 0).unwrap();
        assert_eq!(pass.chars().count(), 5);
        assert!(pass.chars().all(|c| "äöü".contains(c)));
    }
}
