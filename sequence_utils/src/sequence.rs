//! Sparse, zero-indexed sequence container.
//!
//! A `Sequence<T>` is a run of slots. Each slot either holds a `T` or is
//! empty (a hole). Holes count toward the length but hold no value at all,
//! which is different from holding `Value::Undefined` or `Value::Null`.

use std::fmt;

use crate::debug::seq_debug;
use crate::error::{SeqError, SeqResult};

/// Ordered container whose slots may be empty
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    slots: Vec<Option<T>>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Sequence { slots: Vec::new() }
    }

    /// Create a sequence of `len` empty slots
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Sequence { slots }
    }

    /// Create a sequence from explicit slots; `None` marks a hole
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Sequence { slots }
    }

    /// Number of addressable slots, holes included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the sequence has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a value
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if any slot is empty
    pub fn is_sparse(&self) -> bool {
        self.occupied() < self.len()
    }

    /// Value at `index`, or `None` for holes and out-of-range indices
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Like `get`, but indices past the end are an error
    pub fn try_get(&self, index: usize) -> SeqResult<Option<&T>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or_else(|| SeqError::bounds_error(index, self.len()))
    }

    /// Mutable access to the value at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Check if `index` is inside the sequence and empty
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Store `value` at `index`
    ///
    /// Assigning past the end grows the sequence, leaving holes between the
    /// old last slot and `index`.
    pub fn set(&mut self, index: usize, value: T) {
        if index >= self.slots.len() {
            seq_debug!("set: growing length {} -> {}", self.slots.len(), index + 1);
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(value);
    }

    /// Empty the slot at `index` without changing the length
    ///
    /// Returns the removed value, if any.
    pub fn delete(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Append one slot holding `value`
    pub(crate) fn append(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    /// All slots in index order, holes as `None`
    pub fn iter_slots(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Occupied slots with their indices, in ascending order
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (i, v)))
    }

    /// Consume the sequence into its slots
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Sequence {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

/// Build a `Sequence` from a list of elements.
///
/// `_` marks an empty slot:
///
/// ```
/// use sequence_utils::{seq, Sequence};
///
/// let s: Sequence<i32> = seq![1, 2, _, 4];
/// assert_eq!(s.len(), 4);
/// assert!(s.is_hole(2));
/// ```
#[macro_export]
macro_rules! seq {
    (@acc [$($done:expr),*] _ , $($rest:tt)*) => {
        $crate::seq!(@acc [$($done,)* None] $($rest)*)
    };
    (@acc [$($done:expr),*] _) => {
        vec![$($done,)* None]
    };
    (@acc [$($done:expr),*] $elem:expr , $($rest:tt)*) => {
        $crate::seq!(@acc [$($done,)* Some(::core::convert::Into::into($elem))] $($rest)*)
    };
    (@acc [$($done:expr),*] $elem:expr) => {
        vec![$($done,)* Some(::core::convert::Into::into($elem))]
    };
    (@acc [$($done:expr),*]) => {
        vec![$($done),*]
    };
    () => {
        $crate::Sequence::new()
    };
    ($($elems:tt)+) => {
        $crate::Sequence::from_slots($crate::seq!(@acc [] $($elems)+))
    };
}

// ========== Display implementation ==========

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    /// Holes are rendered as runs, e.g. `[1, <2 empty items>, 4]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        let mut holes = 0usize;
        for slot in &self.slots {
            match slot {
                None => holes += 1,
                Some(value) => {
                    if holes > 0 {
                        write_separator(f, &mut first)?;
                        write_holes(f, holes)?;
                        holes = 0;
                    }
                    write_separator(f, &mut first)?;
                    write!(f, "{}", value)?;
                }
            }
        }
        if holes > 0 {
            write_separator(f, &mut first)?;
            write_holes(f, holes)?;
        }
        write!(f, "]")
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, first: &mut bool) -> fmt::Result {
    if !*first {
        write!(f, ", ")?;
    }
    *first = false;
    Ok(())
}

fn write_holes(f: &mut fmt::Formatter<'_>, count: usize) -> fmt::Result {
    if count == 1 {
        write!(f, "<1 empty item>")
    } else {
        write!(f, "<{} empty items>", count)
    }
}
