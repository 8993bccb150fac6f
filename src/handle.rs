//! Nullable-handle operation surface.
//!
//! These functions mirror a handle-based queue API: the queue may be absent,
//! failures come back as `false` (or `0`), and nothing here panics on bad
//! input. Rejections are logged at `debug` level with the underlying
//! [`QueueError`].
//!
//! Code that holds a [`Queue`] directly should call its methods instead and
//! get the typed errors.

use crate::errors::QueueError;
use crate::queue::Queue;

/// Creates an empty queue.
///
/// # Errors
/// [`QueueError::AllocationFailure`] if the queue could not be set up.
pub fn create() -> Result<Queue, QueueError> {
    Queue::try_with_config(Default::default())
}

/// Destroys `q` and every element it holds. No-op for `None`.
pub fn destroy(q: Option<Queue>) {
    let Some(q) = q else {
        return;
    };
    tracing::trace!(len = q.len(), "destroying queue");
    drop(q);
}

/// Inserts a copy of `s` at the head. Returns `false` if `q` is absent or
/// the insert was rejected; the queue is unchanged in that case.
pub fn insert_head(q: Option<&mut Queue>, s: &str) -> bool {
    report("insert_head", require(q).and_then(|q| q.insert_head(s)))
}

/// Inserts a copy of `s` at the tail. Same failure rules as [`insert_head`].
pub fn insert_tail(q: Option<&mut Queue>, s: &str) -> bool {
    report("insert_tail", require(q).and_then(|q| q.insert_tail(s)))
}

/// Removes the head element, copying its value into `out`.
///
/// The copy is truncated to `out.len() - 1` bytes plus a `0` terminator.
/// Returns `false` without touching the queue or `out` if `q` or `out` is
/// absent or the queue is empty.
pub fn remove_head(q: Option<&mut Queue>, out: Option<&mut [u8]>) -> bool {
    let result = require(q).and_then(|q| {
        let out = out.ok_or(QueueError::MissingBuffer)?;
        q.remove_head_into(out)
    });
    report("remove_head", result.map(|_| ()))
}

/// Number of elements; `0` for an absent queue.
pub fn size(q: Option<&Queue>) -> usize {
    q.map_or(0, |q| q.len() as usize)
}

/// Reverses `q` in place. No-op if absent or empty.
pub fn reverse(q: Option<&mut Queue>) {
    if let Some(q) = q {
        q.reverse();
    }
}

/// Sorts `q` ascending with its configured strategy. No-op if absent or
/// holding fewer than two elements.
pub fn sort(q: Option<&mut Queue>) {
    if let Some(q) = q {
        q.sort();
    }
}

fn require(q: Option<&mut Queue>) -> Result<&mut Queue, QueueError> {
    q.ok_or(QueueError::NullQueue)
}

fn report(op: &'static str, result: Result<(), QueueError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(op, error = %err, "queue operation rejected");
            false
        }
    }
}
