//! In-place mutation: `push`.

use crate::debug::seq_debug;
use crate::sequence::Sequence;

/// Append `values` in order after the current last slot.
///
/// Returns the new length. Pushing nothing leaves the sequence unchanged
/// and returns its current length.
pub fn push<T, I>(seq: &mut Sequence<T>, values: I) -> usize
where
    I: IntoIterator<Item = T>,
{
    let before = seq.len();
    for value in values {
        seq.append(value);
    }
    if seq.len() != before {
        seq_debug!("push: length {} -> {}", before, seq.len());
    }
    seq.len()
}
