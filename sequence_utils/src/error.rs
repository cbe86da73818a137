//! Error types for sequence and record operations
//!
//! Only folding has a failure mode in normal use; the remaining variants
//! come from the checked accessors on `Sequence` and `Record`.

use thiserror::Error;

/// Sequence utility error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// Folding a sequence with no occupied slots and no seed
    #[error("TypeError: Reduce of empty array with no initial value")]
    EmptyReduce,

    /// Index out of bounds error
    #[error("RangeError: attempt to access index {index} of sequence with length {length}")]
    IndexOutOfBounds {
        /// Attempted index
        index: usize,
        /// Sequence length
        length: usize,
    },

    /// Invalid argument error
    #[error("ArgumentError: {0}")]
    ArgumentError(String),
}

impl SeqError {
    /// Create a bounds error
    pub fn bounds_error(index: usize, length: usize) -> Self {
        SeqError::IndexOutOfBounds { index, length }
    }

    /// Create an argument error
    pub fn argument_error<S: Into<String>>(msg: S) -> Self {
        SeqError::ArgumentError(msg.into())
    }
}

/// Result type alias for sequence operations
pub type SeqResult<T> = Result<T, SeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", SeqError::EmptyReduce),
            "TypeError: Reduce of empty array with no initial value"
        );

        let err = SeqError::bounds_error(10, 5);
        assert_eq!(
            format!("{}", err),
            "RangeError: attempt to access index 10 of sequence with length 5"
        );

        let err = SeqError::argument_error("property `x` already defined");
        assert_eq!(format!("{}", err), "ArgumentError: property `x` already defined");
    }

    #[test]
    fn test_empty_reduce_is_distinct() {
        assert_ne!(SeqError::EmptyReduce, SeqError::argument_error("empty"));
    }
}
