//! Operation counters for a queue.
//!
//! Counter fields only exist with the `perf-stats` feature. Without it
//! [`QueueStats`] is a zero-sized type and every `record_*` call compiles to
//! nothing, so hot paths pay no cost.

/// Saturating add for a `u64` counter.
#[inline(always)]
pub fn sat_add_u64(counter: &mut u64, delta: u64) {
    *counter = counter.saturating_add(delta);
}

/// High-water-mark update for a `u32` counter.
#[inline(always)]
pub fn max_u32(counter: &mut u32, value: u32) {
    *counter = (*counter).max(value);
}

/// Per-queue operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Successful head or tail inserts.
    #[cfg(feature = "perf-stats")]
    pub inserts: u64,
    /// Inserts refused for capacity or allocation reasons.
    #[cfg(feature = "perf-stats")]
    pub rejected_inserts: u64,
    /// Successful head removals.
    #[cfg(feature = "perf-stats")]
    pub removals: u64,
    /// `reverse()` calls that touched at least one element.
    #[cfg(feature = "perf-stats")]
    pub reversals: u64,
    /// `sort()` calls on queues with two or more elements.
    #[cfg(feature = "perf-stats")]
    pub sorts: u64,
    /// Value comparisons made by merge steps.
    #[cfg(feature = "perf-stats")]
    pub comparisons: u64,
    /// `next` links rewritten by reverse and sort.
    #[cfg(feature = "perf-stats")]
    pub relinks: u64,
    /// Largest length observed.
    #[cfg(feature = "perf-stats")]
    pub peak_len: u32,
}

impl QueueStats {
    #[inline(always)]
    pub(crate) fn record_insert(&mut self, _len_after: u32) {
        #[cfg(feature = "perf-stats")]
        {
            sat_add_u64(&mut self.inserts, 1);
            max_u32(&mut self.peak_len, _len_after);
        }
    }

    #[inline(always)]
    pub(crate) fn record_rejected_insert(&mut self) {
        #[cfg(feature = "perf-stats")]
        sat_add_u64(&mut self.rejected_inserts, 1);
    }

    #[inline(always)]
    pub(crate) fn record_removal(&mut self) {
        #[cfg(feature = "perf-stats")]
        sat_add_u64(&mut self.removals, 1);
    }

    #[inline(always)]
    pub(crate) fn record_reversal(&mut self) {
        #[cfg(feature = "perf-stats")]
        sat_add_u64(&mut self.reversals, 1);
    }

    #[inline(always)]
    pub(crate) fn record_sort(&mut self) {
        #[cfg(feature = "perf-stats")]
        sat_add_u64(&mut self.sorts, 1);
    }

    #[inline(always)]
    pub(crate) fn record_comparison(&mut self) {
        #[cfg(feature = "perf-stats")]
        sat_add_u64(&mut self.comparisons, 1);
    }

    #[inline(always)]
    pub(crate) fn record_relink(&mut self) {
        #[cfg(feature = "perf-stats")]
        sat_add_u64(&mut self.relinks, 1);
    }
}
