//! Stable merge sort over element chains.
//!
//! Chains are sorted purely by rewriting `next` links; no element is created,
//! destroyed, or has its value touched. Ordering is byte-wise on the value
//! (`str` ordering), and a merge always takes from the left run on equal
//! values, which makes both drivers stable.
//!
//! # Split policy
//! [`split`] finds the midpoint with a slow/fast walk where the fast cursor
//! starts one hop ahead. The front half keeps `ceil(n / 2)` nodes, so for odd
//! lengths the extra node stays in front.
//!
//! Callers own the queue bookkeeping: the drivers return only the new head
//! and the caller recomputes the tail with [`last`].

use crate::arena::{ElementArena, ElementId, Link};
use crate::perf_stats::QueueStats;

/// Detaches the back half of the chain starting at `head` and returns it.
///
/// The front half stays reachable from `head` with its last `next` cleared.
/// Chains of length 0 or 1 yield `None`.
pub(crate) fn split(arena: &mut ElementArena, head: Link, stats: &mut QueueStats) -> Link {
    let Some(mut slow) = head else {
        return None;
    };
    let mut fast = arena.next(slow);

    while let Some(step) = fast.and_then(|f| arena.next(f)) {
        slow = match arena.next(slow) {
            Some(next) => next,
            None => break,
        };
        fast = arena.next(step);
    }

    let back = arena.next(slow);
    if back.is_some() {
        arena.set_next(slow, None);
        stats.record_relink();
    }
    back
}

/// Merges two ascending chains into one. Returns `(head, tail)`.
///
/// Equal values are taken from `left` first.
pub(crate) fn merge(
    arena: &mut ElementArena,
    mut left: Link,
    mut right: Link,
    stats: &mut QueueStats,
) -> (Link, Link) {
    let mut head: Link = None;
    let mut tail: Link = None;

    while let (Some(l), Some(r)) = (left, right) {
        stats.record_comparison();
        let taken = if arena.value(l) <= arena.value(r) {
            left = arena.next(l);
            l
        } else {
            right = arena.next(r);
            r
        };
        append(arena, &mut head, &mut tail, taken, stats);
    }

    if let Some(rest) = left.or(right) {
        append(arena, &mut head, &mut tail, rest, stats);
        tail = last(arena, Some(rest));
    }

    (head, tail)
}

fn append(
    arena: &mut ElementArena,
    head: &mut Link,
    tail: &mut Link,
    node: ElementId,
    stats: &mut QueueStats,
) {
    match *tail {
        Some(t) => {
            arena.set_next(t, Some(node));
            stats.record_relink();
        }
        None => *head = Some(node),
    }
    *tail = Some(node);
}

/// Top-down merge sort. Recursion depth is `O(log n)`.
pub(crate) fn merge_sort(arena: &mut ElementArena, head: Link, stats: &mut QueueStats) -> Link {
    let back = split(arena, head, stats);
    if back.is_none() {
        return head;
    }

    let front = merge_sort(arena, head, stats);
    let back = merge_sort(arena, back, stats);
    merge(arena, front, back, stats).0
}

/// Bottom-up merge sort: passes over the chain merging adjacent runs of
/// width 1, 2, 4, ... until a pass performs a single merge.
pub(crate) fn merge_sort_bottom_up(
    arena: &mut ElementArena,
    head: Link,
    stats: &mut QueueStats,
) -> Link {
    let mut head = head;
    let mut width: usize = 1;

    loop {
        let mut remaining = head;
        let mut merged_head: Link = None;
        let mut merged_tail: Link = None;
        let mut merges = 0usize;

        while let Some(start) = remaining {
            let right = cut(arena, Some(start), width, stats);
            remaining = cut(arena, right, width, stats);

            let (run_head, run_tail) = merge(arena, Some(start), right, stats);
            match merged_tail {
                Some(t) => {
                    arena.set_next(t, run_head);
                    stats.record_relink();
                }
                None => merged_head = run_head,
            }
            merged_tail = run_tail;
            merges += 1;
        }

        head = merged_head;
        if merges <= 1 {
            return head;
        }
        width = width.saturating_mul(2);
    }
}

/// Detaches the chain after the first `count` nodes of `start` and returns it.
fn cut(arena: &mut ElementArena, start: Link, count: usize, stats: &mut QueueStats) -> Link {
    let mut node = start?;
    for _ in 1..count {
        node = arena.next(node)?;
    }

    let rest = arena.next(node);
    if rest.is_some() {
        arena.set_next(node, None);
        stats.record_relink();
    }
    rest
}

/// Walks to the last node of a chain.
pub(crate) fn last(arena: &ElementArena, head: Link) -> Link {
    let mut node = head?;
    while let Some(next) = arena.next(node) {
        node = next;
    }
    Some(node)
}
