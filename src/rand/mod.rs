//! Random number generation backed by the OS entropy source.

mod index;
mod shuffle;

pub use index::{uniform_index, uniform_index_inclusive};
pub use shuffle::insert_random;

// =============================================================================
// Entropy
// =============================================================================

/// A source of uniformly distributed 64-bit words.
///
/// Production code only ever uses [`OsEntropy`]. The trait exists so the
/// sampling and shuffling primitives can be driven by a scripted source.
pub trait Entropy {
    fn next_u64(&mut self) -> Result<u64, getrandom::Error>;
}

/// The operating system CSPRNG (`getrandom(2)`, `/dev/urandom`, `BCryptGenRandom`, ...).
///
/// Every word is requested fresh from the OS. Nothing is pooled.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    #[inline]
    fn next_u64(&mut self) -> Result<u64, getrandom::Error> {
        getrandom::u64()
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::Entropy;

    /// Replays a fixed list of words, then fails like an exhausted OS source.
    pub struct Scripted {
        words: VecDeque<u64>,
        pub drawn: usize,
    }

    impl Scripted {
        pub fn new(words: &[u64]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                drawn: 0,
            }
        }
    }

    impl Entropy for Scripted {
        fn next_u64(&mut self) -> Result<u64, getrandom::Error> {
            let word = self.words.pop_front().ok_or(getrandom::Error::UNSUPPORTED)?;
            self.drawn += 1;
            Ok(word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_entropy_produces_distinct_words() {
        let mut src = OsEntropy;
        let a = src.next_u64().unwrap();
        let b = src.next_u64().unwrap();
        let c = src.next_u64().unwrap();
        assert!(a != b || b != c);
    }

    #[test]
    fn scripted_source_fails_when_exhausted() {
        let mut src = scripted::Scripted::new(&[7]);
        assert_eq!(src.next_u64(), Ok(7));
        assert_eq!(src.next_u64(), Err(getrandom::Error::UNSUPPORTED));
        assert_eq!(src.drawn, 1);
    }
}
