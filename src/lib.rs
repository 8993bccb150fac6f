//! Singly-linked FIFO queue of owned strings.
//!
//! ## Scope
//! A [`Queue`] stores copies of caller strings in insertion order and supports
//! head/tail insertion, head removal, in-place reversal, and an in-place stable
//! merge sort by byte-wise value order.
//!
//! ## Key invariants
//! - `len == 0` iff the queue has no head iff it has no tail.
//! - Walking from the head visits exactly `len` elements and ends at the tail,
//!   whose `next` link is empty.
//! - Reversal and sort only rewrite links: no element is created, destroyed,
//!   or copied.
//! - A failed insert leaves the queue exactly as it was.
//!
//! ## Layout
//! Elements live in a slot arena owned by the queue and are linked by `u32`
//! ids. The head chain owns its elements; the tail id exists only to make tail
//! insertion O(1).
//!
//! ## Entry points
//! - [`Queue`]: typed API returning [`QueueError`].
//! - [`handle`]: nullable-handle functions returning `bool`/counts.
//! - [`QueueConfig`] / [`SortStrategy`]: limits and sort driver selection.
//! - [`QueueStats`]: operation counters (fields require `perf-stats`).

mod arena;
pub mod buffer;
mod config;
mod errors;
pub mod handle;
pub mod perf_stats;
mod queue;
mod sort;
#[cfg(test)]
pub mod test_utils;

pub use config::{QueueConfig, SortStrategy};
pub use errors::QueueError;
pub use perf_stats::QueueStats;
pub use queue::{Iter, Queue};
