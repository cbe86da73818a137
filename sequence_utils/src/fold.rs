//! Folding a sequence into a single value.
//!
//! Whether a seed was supplied is tracked by `Option`, never by comparing
//! the seed against a sentinel, so seeds like `0`, `false` or `""` behave
//! like any other seed.

use crate::debug::seq_debug;
use crate::error::{SeqError, SeqResult};
use crate::sequence::Sequence;

/// Fold with an explicit seed.
///
/// The combiner runs once per index in `[0, len)`, holes included (passed
/// as `None`), with `(accumulator, element, index, sequence)`. An empty
/// sequence returns `seed` without calling the combiner.
pub fn fold<T, A, F>(seq: &Sequence<T>, seed: A, mut combine: F) -> A
where
    F: FnMut(A, Option<&T>, usize, &Sequence<T>) -> A,
{
    let len = seq.len();
    let mut acc = seed;
    for index in 0..len {
        acc = combine(acc, seq.get(index), index, seq);
    }
    acc
}

/// Fold with an optional seed.
///
/// With `Some(seed)` this is `fold`. Without a seed the accumulator starts
/// as the first occupied element (index 0 for a dense sequence) and the
/// combiner runs over the indices after it. A single-element sequence
/// returns that element without calling the combiner.
///
/// # Errors
///
/// `SeqError::EmptyReduce` when there is no seed and no occupied slot.
pub fn reduce<T, F>(seq: &Sequence<T>, mut combine: F, seed: Option<T>) -> SeqResult<T>
where
    T: Clone,
    F: FnMut(T, Option<&T>, usize, &Sequence<T>) -> T,
{
    if let Some(seed) = seed {
        return Ok(fold(seq, seed, combine));
    }

    let Some((first, initial)) = seq.iter_occupied().next() else {
        seq_debug!("reduce: no seed and no occupied slot in length {}", seq.len());
        return Err(SeqError::EmptyReduce);
    };

    let len = seq.len();
    let mut acc = initial.clone();
    for index in first + 1..len {
        acc = combine(acc, seq.get(index), index, seq);
    }
    Ok(acc)
}
