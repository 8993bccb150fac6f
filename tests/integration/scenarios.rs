//! End-to-end scenarios over the typed `Queue` API.

use queue_rs::{Queue, QueueConfig, QueueError, SortStrategy};

fn drain(q: &mut Queue) -> Vec<String> {
    let mut out = Vec::new();
    while let Ok(value) = q.pop_head() {
        out.push(value);
    }
    out
}

#[test]
fn sort_then_drain_yields_ascending() {
    let mut q = Queue::new();
    q.insert_tail("banana").unwrap();
    q.insert_tail("apple").unwrap();
    q.insert_tail("cherry").unwrap();

    q.sort();

    assert_eq!(drain(&mut q), ["apple", "banana", "cherry"]);
    assert_eq!(q.len(), 0);
    q.check_invariants();
}

#[test]
fn reverse_head_inserts_restores_insertion_order() {
    let mut q = Queue::new();
    q.insert_head("a").unwrap();
    q.insert_head("b").unwrap();

    q.reverse();

    assert_eq!(q.pop_head().unwrap(), "a");
    assert_eq!(q.pop_head().unwrap(), "b");
    assert!(q.is_empty());
}

#[test]
fn remove_from_fresh_queue_writes_nothing() {
    let mut q = Queue::new();
    let mut buf = [0x55u8; 16];

    assert_eq!(q.remove_head_into(&mut buf), Err(QueueError::EmptyQueue));
    assert!(buf.iter().all(|&b| b == 0x55));
}

#[test]
fn fifo_order_for_tail_inserts() {
    let mut q = Queue::new();
    let values: Vec<String> = (0..100).map(|i| format!("v{i:03}")).collect();
    for value in &values {
        q.insert_tail(value).unwrap();
    }
    assert_eq!(q.len(), 100);

    assert_eq!(drain(&mut q), values);
}

#[test]
fn head_insert_then_remove_round_trips() {
    let mut q = Queue::new();
    q.insert_tail("tail").unwrap();
    q.insert_head("fresh").unwrap();

    let mut buf = [0u8; 32];
    let copied = q.remove_head_into(&mut buf).unwrap();

    assert_eq!(&buf[..copied], b"fresh");
    assert_eq!(buf[copied], 0);
}

#[test]
fn truncated_removal_is_prefix() {
    let mut q = Queue::new();
    q.insert_tail("strawberry").unwrap();

    let mut buf = [0xFFu8; 6];
    let copied = q.remove_head_into(&mut buf).unwrap();

    assert_eq!(copied, 5);
    assert_eq!(&buf, b"straw\0");
    assert!(q.is_empty());
}

#[test]
fn sort_is_stable_and_idempotent() {
    let mut q = Queue::new();
    for value in ["b", "a", "c", "a", "b"] {
        q.insert_tail(value).unwrap();
    }

    q.sort();
    let once: Vec<String> = q.iter().map(str::to_owned).collect();
    q.sort();
    let twice: Vec<String> = q.iter().map(str::to_owned).collect();

    assert_eq!(once, ["a", "a", "b", "b", "c"]);
    assert_eq!(once, twice);
    q.check_invariants();
}

#[test]
fn bottom_up_strategy_from_config() {
    let mut q = Queue::try_with_config(QueueConfig {
        sort_strategy: SortStrategy::BottomUp,
        initial_capacity: 16,
        ..QueueConfig::default()
    })
    .unwrap();
    for value in ["delta", "alpha", "echo", "charlie", "bravo"] {
        q.insert_tail(value).unwrap();
    }

    q.sort();

    assert_eq!(
        q.iter().collect::<Vec<_>>(),
        ["alpha", "bravo", "charlie", "delta", "echo"]
    );
    assert_eq!(q.peek_tail(), Some("echo"));
}

#[test]
fn reverse_then_sort_then_reverse_is_descending() {
    let mut q = Queue::new();
    for value in ["m", "z", "a", "k"] {
        q.insert_tail(value).unwrap();
    }

    q.reverse();
    q.sort();
    q.reverse();

    assert_eq!(q.iter().collect::<Vec<_>>(), ["z", "m", "k", "a"]);
    q.check_invariants();
}

#[test]
fn rejected_insert_is_transactional() {
    let mut q = Queue::try_with_config(QueueConfig {
        max_value_bytes: Some(10),
        ..QueueConfig::default()
    })
    .unwrap();
    q.insert_tail("0123456789").unwrap();

    let err = q.insert_head("x").unwrap_err();
    assert!(err.is_allocation_failure());
    assert_eq!(q.len(), 1);
    assert_eq!(q.value_bytes(), 10);
    assert_eq!(q.peek_head(), Some("0123456789"));
    q.check_invariants();
}

#[test]
fn large_queue_sort_and_drain() {
    let mut q = Queue::new();
    // 617 is a unit mod 1009, so this visits every key exactly once.
    for i in 0..1009u32 {
        let key = (i * 617) % 1009;
        q.insert_tail(&format!("{key:05}")).unwrap();
    }

    q.sort();
    q.check_invariants();

    let drained = drain(&mut q);
    assert_eq!(drained.len(), 1009);
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(drained.first().map(String::as_str), Some("00000"));
    assert_eq!(drained.last().map(String::as_str), Some("01008"));
}
