//! Error types for adaptive array operations.
//!
//! Every fallible container operation returns one of these variants
//! instead of a sentinel value, so "absent" can never be confused with
//! a valid index or count.

use std::error::Error;
use std::fmt;

/// Errors that can occur during adaptive array operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A read at an index at or past the end of the array.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The array's slot count at the time of the call.
        len: usize,
    },
    /// A read of a slot that holds no element.
    EmptySlot {
        /// The requested index.
        index: usize,
    },
    /// The injected duplicate operation declined to produce a copy.
    DuplicateFailed {
        /// The slot index the duplicate was destined for.
        index: usize,
    },
    /// Growth was refused — the new slot count would exceed the
    /// configured ceiling, or the backing storage could not be reserved.
    CapacityExceeded {
        /// The slot count the write would have required.
        requested: usize,
        /// The configured maximum slot count.
        limit: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range (len {len})")
            }
            Self::EmptySlot { index } => {
                write!(f, "slot at index {index} is empty")
            }
            Self::DuplicateFailed { index } => {
                write!(f, "failed to duplicate element for index {index}")
            }
            Self::CapacityExceeded { requested, limit } => {
                write!(
                    f,
                    "array capacity exceeded: requested {requested} slots, limit {limit} slots"
                )
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_index() {
        let err = ArrayError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 is out of range (len 3)");

        let err = ArrayError::EmptySlot { index: 2 };
        assert_eq!(err.to_string(), "slot at index 2 is empty");
    }

    #[test]
    fn display_reports_capacity_figures() {
        let err = ArrayError::CapacityExceeded {
            requested: 100,
            limit: 64,
        };
        assert_eq!(
            err.to_string(),
            "array capacity exceeded: requested 100 slots, limit 64 slots"
        );
    }
}
