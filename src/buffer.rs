//! Bounded copy of a value into a caller-supplied byte buffer.

/// Copies as much of `value` as fits into `buf`, followed by a `0` terminator.
///
/// At most `buf.len() - 1` value bytes are written, and the terminator always
/// lands inside `buf`. An empty buffer is left untouched. Truncation is
/// byte-wise and may split a multi-byte UTF-8 sequence.
///
/// Returns the number of value bytes copied, excluding the terminator.
pub fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let copied = value.len().min(room);
    buf[..copied].copy_from_slice(&value.as_bytes()[..copied]);
    buf[copied] = 0;
    copied
}
