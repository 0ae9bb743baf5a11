//! List-specific error types.

use std::error::Error;
use std::fmt;

/// Errors reported by the checked accessors and by configuration validation.
///
/// The primary accessors (`front`, `pop_back`, indexing, ...) never return
/// these; they panic on contract violations instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An operation that needs at least one element ran on an empty list.
    Empty {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
    /// An index at or beyond the number of live elements.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the request.
        len: usize,
    },
    /// A configuration requested zero initial slots.
    ZeroCapacity,
    /// A requested slot count whose buffer would not fit in `isize::MAX` bytes.
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { operation } => {
                write!(f, "{operation} called on an empty list")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::ZeroCapacity => write!(f, "initial capacity must be at least 1"),
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
        }
    }
}

impl Error for ListError {}
