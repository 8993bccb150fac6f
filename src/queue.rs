//! Singly-linked FIFO queue of owned strings.
//!
//! Elements live in an [`ElementArena`] owned by the queue. The chain reachable
//! from `head` is the logical owner of every element; `tail` is a plain id kept
//! only so tail inserts are O(1). It is never used to release an element.
//!
//! # Invariants
//! - `len == 0` iff `head` is `None` iff `tail` is `None`.
//! - When non-empty, walking `next` from `head` visits exactly `len` elements,
//!   the last of which is `tail`, and `tail.next` is `None`.
//! - The arena holds exactly `len` live elements.
//! - `value_bytes` is the sum of the lengths of all stored values.
//!
//! Every public method leaves these invariants intact; a method that returns
//! an error has not modified the queue.

use core::fmt;
use core::iter::FusedIterator;

use crate::arena::{ElementArena, ElementId, Link};
use crate::buffer::copy_truncated;
use crate::config::{QueueConfig, SortStrategy};
use crate::errors::QueueError;
use crate::perf_stats::QueueStats;
use crate::sort;

/// FIFO queue of owned strings with in-place reversal and stable sort.
///
/// Uses `u32` length for 32/64-bit portability; the configured
/// [`QueueConfig::max_len`] caps growth.
pub struct Queue {
    arena: ElementArena,
    head: Link,
    tail: Link,
    len: u32,
    value_bytes: usize,
    config: QueueConfig,
    stats: QueueStats,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Queue {
    /// Creates an empty queue with the default config. Does not allocate.
    pub fn new() -> Self {
        Self {
            arena: ElementArena::new(),
            head: None,
            tail: None,
            len: 0,
            value_bytes: 0,
            config: QueueConfig::default(),
            stats: QueueStats::default(),
        }
    }

    /// Creates an empty queue after validating `config` and reserving
    /// `config.initial_capacity` element slots.
    pub fn try_with_config(config: QueueConfig) -> Result<Self, QueueError> {
        config.validate()?;

        let mut queue = Self {
            config,
            ..Self::new()
        };
        queue.arena.try_reserve(config.initial_capacity as usize)?;

        if config != QueueConfig::default() {
            tracing::debug!(
                max_len = config.max_len,
                initial_capacity = config.initial_capacity,
                max_value_bytes = ?config.max_value_bytes,
                sort_strategy = ?config.sort_strategy,
                "queue created with custom config"
            );
        }

        Ok(queue)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        let empty = self.head.is_none();

        assert!(empty == self.tail.is_none());
        assert!(empty == (self.len == 0));

        empty
    }

    /// Number of elements. O(1).
    #[inline]
    pub fn len(&self) -> u32 {
        assert!((self.len == 0) == self.head.is_none());
        assert!((self.len == 0) == self.tail.is_none());

        self.len
    }

    /// Total bytes held by stored values.
    #[inline]
    pub fn value_bytes(&self) -> usize {
        self.value_bytes
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }

    /// Returns the head value without removing it.
    pub fn peek_head(&self) -> Option<&str> {
        self.head.map(|id| self.arena.value(id))
    }

    /// Returns the tail value without removing it.
    pub fn peek_tail(&self) -> Option<&str> {
        self.tail.map(|id| self.arena.value(id))
    }

    /// Iterates values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Inserts a copy of `value` at the head.
    ///
    /// # Errors
    /// [`QueueError::CapacityExceeded`] or [`QueueError::AllocationFailure`];
    /// the queue is unchanged in both cases.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let old_len = self.len;
        let id = self.store(value)?;

        self.arena.set_next(id, self.head);
        self.head = Some(id);
        if self.tail.is_none() {
            assert!(old_len == 0);
            self.tail = Some(id);
        }

        self.len += 1;
        self.stats.record_insert(self.len);

        assert!(self.len == old_len + 1);
        assert!(self.head == Some(id));
        Ok(())
    }

    /// Inserts a copy of `value` at the tail.
    ///
    /// # Errors
    /// Same as [`insert_head`](Self::insert_head).
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let old_len = self.len;
        let id = self.store(value)?;

        match self.tail {
            None => {
                assert!(self.head.is_none());
                assert!(old_len == 0);

                self.head = Some(id);
            }
            Some(tail) => {
                assert!(self.head.is_some());
                // Tail's next should be None (it's the end of the queue)
                assert!(self.arena.next(tail).is_none());

                self.arena.set_next(tail, Some(id));
            }
        }
        self.tail = Some(id);

        self.len += 1;
        self.stats.record_insert(self.len);

        assert!(self.len == old_len + 1);
        assert!(self.tail == Some(id));
        Ok(())
    }

    /// Removes the head element and returns its value.
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`] if there is nothing to remove.
    pub fn pop_head(&mut self) -> Result<String, QueueError> {
        let head = self.head.ok_or(QueueError::EmptyQueue)?;
        let old_len = self.len;

        assert!(old_len > 0);

        self.head = self.arena.next(head);
        if self.head.is_none() {
            // Queue is now empty.
            self.tail = None;
        }
        self.arena.set_next(head, None);

        let value = self.arena.release(head);
        self.len -= 1;
        self.value_bytes -= value.len();
        self.stats.record_removal();

        assert!(self.len == old_len - 1);
        assert!(self.head.is_none() == self.tail.is_none());
        assert!(self.arena.live() == self.len);

        Ok(value)
    }

    /// Removes the head element, copying its value into `buf`.
    ///
    /// At most `buf.len() - 1` value bytes are copied, followed by a `0`
    /// terminator; nothing past `buf.len()` is written and an empty `buf`
    /// receives nothing. The element is destroyed either way.
    ///
    /// Returns the number of value bytes copied (terminator excluded).
    ///
    /// # Errors
    /// [`QueueError::EmptyQueue`]; `buf` is not written.
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Result<usize, QueueError> {
        let head = self.head.ok_or(QueueError::EmptyQueue)?;
        let copied = copy_truncated(self.arena.value(head), buf);
        self.pop_head()?;
        Ok(copied)
    }

    /// Destroys every element. The queue stays usable.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.value_bytes = 0;

        assert!(self.is_empty());
    }

    /// Reverses element order in place by flipping every `next` link.
    ///
    /// No element is created, destroyed, or copied. O(n) time, O(1) space.
    pub fn reverse(&mut self) {
        let Some(old_head) = self.head else {
            return;
        };
        let old_len = self.len;

        let mut prev: Link = None;
        let mut cursor: Link = Some(old_head);
        while let Some(id) = cursor {
            cursor = self.arena.next(id);
            self.arena.set_next(id, prev);
            self.stats.record_relink();
            prev = Some(id);
        }

        self.head = prev;
        self.tail = Some(old_head);
        self.stats.record_reversal();

        assert!(self.arena.next(old_head).is_none());
        assert!(self.len == old_len);
        tracing::trace!(len = self.len, "queue reversed");
    }

    /// Sorts ascending by byte-wise value order using the configured
    /// strategy. Stable: equal values keep their relative order.
    pub fn sort(&mut self) {
        self.sort_with(self.config.sort_strategy);
    }

    /// Sorts with an explicit strategy. No-op for fewer than two elements.
    pub fn sort_with(&mut self, strategy: SortStrategy) {
        if self.len < 2 {
            return;
        }
        let old_len = self.len;

        let head = match strategy {
            SortStrategy::Recursive => sort::merge_sort(&mut self.arena, self.head, &mut self.stats),
            SortStrategy::BottomUp => {
                sort::merge_sort_bottom_up(&mut self.arena, self.head, &mut self.stats)
            }
        };
        // The drivers only thread `head`; recover the tail from the new chain.
        self.head = head;
        self.tail = sort::last(&self.arena, head);
        self.stats.record_sort();

        assert!(self.head.is_some() && self.tail.is_some());
        assert!(self.len == old_len);
        tracing::trace!(len = self.len, ?strategy, "queue sorted");
    }

    /// Panics if internal invariants are violated. O(n).
    pub fn check_invariants(&self) {
        if self.len == 0 {
            assert!(self.head.is_none(), "len=0 but head is Some");
            assert!(self.tail.is_none(), "len=0 but tail is Some");
            assert!(self.value_bytes == 0, "len=0 but value_bytes is non-zero");
            assert!(self.arena.live() == 0, "len=0 but arena holds elements");
            return;
        }

        assert!(self.head.is_some(), "len>0 but head is None");
        assert!(self.tail.is_some(), "len>0 but tail is None");

        let mut count: u32 = 0;
        let mut bytes: usize = 0;
        let mut current = self.head;
        let mut last: Link = None;

        while let Some(id) = current {
            count += 1;
            assert!(count <= self.len, "more nodes than len indicates");
            assert!(self.arena.is_live(id), "chain reaches released element");

            bytes += self.arena.value(id).len();
            last = current;
            current = self.arena.next(id);
        }

        assert!(
            count == self.len,
            "counted {} nodes but len is {}",
            count,
            self.len
        );
        assert!(last == self.tail, "last node is not tail");
        assert!(
            self.arena.live() == self.len,
            "arena holds {} elements but len is {}",
            self.arena.live(),
            self.len
        );
        assert!(bytes == self.value_bytes, "value_bytes out of sync");
    }

    /// Applies the capacity and byte-budget limits and allocates an unlinked
    /// element. Nothing is modified on error.
    fn store(&mut self, value: &str) -> Result<ElementId, QueueError> {
        let result = self.admit(value).and_then(|()| self.arena.try_insert(value));
        match result {
            Ok(id) => {
                self.value_bytes += value.len();
                Ok(id)
            }
            Err(err) => {
                self.stats.record_rejected_insert();
                Err(err)
            }
        }
    }

    fn admit(&self, value: &str) -> Result<(), QueueError> {
        if self.len >= self.config.max_len {
            return Err(QueueError::CapacityExceeded {
                max: self.config.max_len,
            });
        }
        if let Some(limit) = self.config.max_value_bytes {
            if value.len() > limit.saturating_sub(self.value_bytes) {
                return Err(QueueError::AllocationFailure {
                    requested: value.len(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over queue values.
pub struct Iter<'a> {
    arena: &'a ElementArena,
    cursor: Link,
    remaining: u32,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.arena.next(id);
        self.remaining -= 1;
        Some(self.arena.value(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
