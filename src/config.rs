//! Queue construction parameters.

use crate::errors::QueueError;

/// Merge-sort driver used by [`Queue::sort`](crate::Queue::sort).
///
/// Both strategies are stable and produce identical output; they differ only
/// in how the work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Top-down: split at the midpoint, sort each half, merge.
    /// Recursion depth is `O(log n)`.
    #[default]
    Recursive,
    /// Bottom-up: merge adjacent runs of width 1, 2, 4, ... iteratively.
    /// Constant stack usage.
    BottomUp,
}

/// Limits and defaults for a [`Queue`](crate::Queue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum number of elements. Inserts beyond this fail with
    /// [`QueueError::CapacityExceeded`].
    pub max_len: u32,
    /// Element slots reserved at construction. Must not exceed `max_len`.
    pub initial_capacity: u32,
    /// Upper bound on the total bytes of stored values (`None` = unbounded).
    ///
    /// An insert that would cross the budget fails with
    /// [`QueueError::AllocationFailure`].
    pub max_value_bytes: Option<usize>,
    /// Strategy used by `sort()`.
    pub sort_strategy: SortStrategy,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_len: u32::MAX,
            initial_capacity: 0,
            max_value_bytes: None,
            sort_strategy: SortStrategy::Recursive,
        }
    }
}

impl QueueConfig {
    /// Checks internal consistency.
    pub fn validate(&self) -> Result<(), QueueError> {
        if self.max_len == 0 {
            return Err(QueueError::InvalidConfig {
                reason: "max_len must be > 0",
            });
        }
        if self.initial_capacity > self.max_len {
            return Err(QueueError::InvalidConfig {
                reason: "initial_capacity exceeds max_len",
            });
        }
        Ok(())
    }
}
