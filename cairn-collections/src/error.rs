//! Error types for container operations.
//!
//! Every recoverable failure is reported through [`Error`]; the operation
//! that returned it left the container untouched. Pushing into a full
//! [`RingBuffer`](crate::RingBuffer) is reported separately through [`Full`],
//! which hands the rejected value back to the caller.

use core::fmt;

use crate::Value;

/// Reason a container operation could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Index outside the live range of the container.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// The container holds no elements.
    Empty,
    /// No element equal to the given value exists.
    NotFound(Value),
}

impl Error {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Empty => f.write_str("container is empty"),
            Self::NotFound(value) => write!(f, "value {value} not found"),
        }
    }
}

impl std::error::Error for Error {}

/// Error returned when a fixed-capacity container is full.
///
/// Carries the value that could not be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full(pub Value);

impl Full {
    /// Returns the value that could not be inserted.
    pub const fn into_inner(self) -> Value {
        self.0
    }
}

impl fmt::Display for Full {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer is full, rejected value {}", self.0)
    }
}

impl std::error::Error for Full {}
