//! Predicate and value searches.
//!
//! `some`/`every` scan occupied slots with a predicate; `includes`,
//! `index_of` and `last_index_of` look for a target value.
//!
//! ## Start index normalization
//!
//! Forward searches (`includes`, `index_of`) treat a negative start as an
//! offset from the end and clamp anything still negative to 0. The backward
//! search (`last_index_of`) does not clamp: a start that is still negative
//! after adding the length means there is nothing to search.

use crate::debug::seq_debug;
use crate::equality::{EqMode, SeqEq};
use crate::sequence::Sequence;
use crate::truthy::Truthy;

/// Resolve a signed start index for a forward scan.
///
/// Returns `None` when the resolved start is at or past `len`.
pub fn normalize_forward_start(len: usize, start: Option<i64>) -> Option<usize> {
    let start = match start {
        None => 0,
        Some(s) if s < 0 => {
            let from_end = signed_len(len).saturating_add(s);
            usize::try_from(from_end).unwrap_or(0)
        }
        Some(s) => usize::try_from(s).unwrap_or(usize::MAX),
    };
    if start >= len {
        None
    } else {
        Some(start)
    }
}

/// Resolve a signed start index for a backward scan.
///
/// A missing start, or one at or past `len`, means `len - 1`. Returns `None`
/// for an empty sequence or when a negative start overshoots the beginning.
pub fn normalize_backward_start(len: usize, start: Option<i64>) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match start {
        None => Some(last),
        Some(s) if s < 0 => usize::try_from(signed_len(len).saturating_add(s)).ok(),
        Some(s) => Some(usize::try_from(s).map_or(last, |s| s.min(last))),
    }
}

fn signed_len(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Check whether any occupied element satisfies `predicate`.
///
/// Stops at the first truthy result. False for a sequence without occupied
/// slots.
pub fn some<T, R, F>(seq: &Sequence<T>, mut predicate: F) -> bool
where
    R: Truthy,
    F: FnMut(&T, usize, &Sequence<T>) -> R,
{
    let len = seq.len();
    for index in 0..len {
        if let Some(value) = seq.get(index) {
            if predicate(value, index, seq).is_truthy() {
                return true;
            }
        }
    }
    false
}

/// Check whether every occupied element satisfies `predicate`.
///
/// Stops at the first falsy result. Vacuously true for a sequence without
/// occupied slots.
pub fn every<T, R, F>(seq: &Sequence<T>, mut predicate: F) -> bool
where
    R: Truthy,
    F: FnMut(&T, usize, &Sequence<T>) -> R,
{
    let len = seq.len();
    for index in 0..len {
        if let Some(value) = seq.get(index) {
            if !predicate(value, index, seq).is_truthy() {
                return false;
            }
        }
    }
    true
}

/// Check whether `target` occurs at or after `from_index`.
///
/// Uses `EqMode::SameValueZero`, so `NaN` finds `NaN`. Empty slots read as
/// absent and match a target for which `reads_as_hole` holds.
pub fn includes<T: SeqEq>(seq: &Sequence<T>, target: &T, from_index: Option<i64>) -> bool {
    let Some(start) = normalize_forward_start(seq.len(), from_index) else {
        seq_debug!("includes: start {:?} outside length {}", from_index, seq.len());
        return false;
    };
    let hole_matches = target.reads_as_hole();
    seq.iter_slots().skip(start).any(|slot| match slot {
        Some(value) => value.seq_eq(target, EqMode::SameValueZero),
        None => hole_matches,
    })
}

/// Index of the first element strictly equal to `target`, scanning forward
/// from `from_index`.
///
/// Empty slots never match. `None` when not found or when the start is past
/// the end.
pub fn index_of<T: SeqEq>(seq: &Sequence<T>, target: &T, from_index: Option<i64>) -> Option<usize> {
    let Some(start) = normalize_forward_start(seq.len(), from_index) else {
        seq_debug!("index_of: start {:?} outside length {}", from_index, seq.len());
        return None;
    };
    seq.iter_occupied()
        .skip_while(|(index, _)| *index < start)
        .find(|(_, value)| value.seq_eq(target, EqMode::Strict))
        .map(|(index, _)| index)
}

/// Index of the last element strictly equal to `target`, scanning backward
/// from `from_index` (default: the last slot).
pub fn last_index_of<T: SeqEq>(
    seq: &Sequence<T>,
    target: &T,
    from_index: Option<i64>,
) -> Option<usize> {
    let Some(start) = normalize_backward_start(seq.len(), from_index) else {
        seq_debug!("last_index_of: start {:?} before beginning of length {}", from_index, seq.len());
        return None;
    };
    (0..=start).rev().find(|&index| {
        seq.get(index)
            .is_some_and(|value| value.seq_eq(target, EqMode::Strict))
    })
}
