//! Error types for queue operations.
//!
//! Every failure is a caller-visible value. Conditions that can only arise
//! from a bug inside the queue (dangling element ids, free-list corruption)
//! panic instead of producing an error.

use std::fmt;

/// Errors returned by [`Queue`](crate::Queue) operations and the handle layer.
///
/// A returned error always means the queue was left exactly as it was
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueueError {
    /// An operation was given an absent queue handle.
    NullQueue,
    /// Removal was requested without an output buffer.
    MissingBuffer,
    /// Removal was requested on a queue with no elements.
    EmptyQueue,
    /// Reserving storage for a new element or its value failed, or the
    /// configured byte budget could not cover the value.
    AllocationFailure { requested: usize },
    /// The queue already holds `max` elements.
    CapacityExceeded { max: u32 },
    /// The queue configuration is inconsistent.
    InvalidConfig { reason: &'static str },
}

impl QueueError {
    /// Returns `true` for errors caused by storage exhaustion.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullQueue => write!(f, "queue handle is absent"),
            Self::MissingBuffer => write!(f, "output buffer is absent"),
            Self::EmptyQueue => write!(f, "queue is empty"),
            Self::AllocationFailure { requested } => {
                write!(f, "allocation failed: {requested} bytes requested")
            }
            Self::CapacityExceeded { max } => {
                write!(f, "queue capacity exceeded (max: {max} elements)")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid queue config: {reason}"),
        }
    }
}

impl std::error::Error for QueueError {}
