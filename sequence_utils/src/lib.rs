//! Sequence Utilities
//!
//! Iteration helpers over sparse sequences and keyed records:
//!
//! - `each`, `map`, `filter` for traversal
//! - `some`, `every`, `includes`, `index_of`, `last_index_of` for searching
//! - `reduce` and `fold` for accumulation
//! - `push` for in-place appends
//! - `keys` and `values` for own-property extraction
//!
//! `Sequence<T>` may contain empty slots (holes). `Value` is a dynamically
//! typed element for mixed sequences such as `[1, "x", NaN]`.

pub mod debug;
pub mod equality;
pub mod error;
pub mod fold;
pub mod mutate;
pub mod record;
pub mod search;
pub mod sequence;
#[cfg(feature = "serde")]
pub mod serialize;
pub mod traverse;
pub mod truthy;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use sequence_utils::prelude::*;
///
/// let s = Sequence::from(vec![2, 9, 9]);
/// assert_eq!(index_of(&s, &9, Some(2)), Some(2));
/// ```
pub mod prelude {
    pub use super::equality::{equals, EqMode, SeqEq};
    pub use super::error::{SeqError, SeqResult};
    pub use super::fold::{fold, reduce};
    pub use super::mutate::push;
    pub use super::record::{keys, values, Property, Record};
    pub use super::search::{every, includes, index_of, last_index_of, some};
    pub use super::sequence::Sequence;
    pub use super::traverse::{each, filter, map};
    pub use super::truthy::Truthy;
    pub use super::value::Value;
}

pub use prelude::*;
