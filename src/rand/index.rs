//! Unbiased index selection.

use super::Entropy;

/// Returns `i` with `0 <= i < bound`, every value equally likely.
///
/// Words below `2^64 mod bound` are rejected before reducing, so the
/// accepted range is an exact multiple of `bound` and no residue is favoured.
/// The expected number of draws is below 2 for any bound.
///
/// # Panics
/// If `bound` is zero.
pub fn uniform_index<E: Entropy>(src: &mut E, bound: usize) -> Result<usize, getrandom::Error> {
    assert!(bound > 0, "uniform_index: empty range");

    let n = bound as u64;
    // 2^64 mod n, computed without 128-bit arithmetic.
    let threshold = n.wrapping_neg() % n;

    loop {
        let word = src.next_u64()?;
        if word >= threshold {
            return Ok((word % n) as usize);
        }
    }
}

/// Returns `i` with `0 <= i <= max`.
#[inline]
pub fn uniform_index_inclusive<E: Entropy>(
    src: &mut E,
    max: usize,
) -> Result<usize, getrandom::Error> {
    uniform_index(src, max + 1)
}
