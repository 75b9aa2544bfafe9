//! # Array Error Types
//!
//! All contract violations the containers report. None of them leave a
//! container in a modified state.

use thiserror::Error;

/// Errors that can occur in array operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A size, dimension, capacity or insert position was not acceptable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index fell outside the valid range for the current length.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The length the index was checked against.
        len: usize,
    },

    /// No element equal to the requested value exists.
    #[error("value not found")]
    NotFound,

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for array operations.
pub type ArrayResult<T> = Result<T, ArrayError>;

impl ArrayError {
    /// Checks `index < len`, producing `IndexOutOfRange` otherwise.
    pub(crate) fn check_index(index: usize, len: usize) -> ArrayResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_bounds() {
        assert!(ArrayError::check_index(0, 1).is_ok());
        assert_eq!(
            ArrayError::check_index(3, 3),
            Err(ArrayError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ArrayError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 out of range for length 4");
        assert_eq!(ArrayError::NotFound.to_string(), "value not found");
    }
}
