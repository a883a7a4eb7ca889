//! Online Fisher-Yates insertion.

use super::{Entropy, uniform_index_inclusive};

/// Inserts `item` at a uniformly random position among the `len + 1` slots of `seq`.
///
/// If `seq` is a uniformly random arrangement before the call, it is one after
/// the call, so appending items one at a time yields a uniform permutation of
/// everything appended, regardless of the order the items arrived in.
///
/// The displaced element moves to the end rather than shifting the tail.
pub fn insert_random<T, E: Entropy>(
    src: &mut E,
    seq: &mut Vec<T>,
    item: T,
) -> Result<(), getrandom::Error> {
    let len = seq.len();
    let j = uniform_index_inclusive(src, len)?;
    seq.push(item);
    seq.swap(j, len);
    Ok(())
}
