//! Sort properties: ordering, permutation, idempotence, and agreement
//! between strategies. Stability is checked against element identity by the
//! unit tests in the sort module.

use proptest::prelude::*;

use queue_rs::{Queue, SortStrategy};

fn sort_strategy() -> impl Strategy<Value = SortStrategy> {
    prop_oneof![Just(SortStrategy::Recursive), Just(SortStrategy::BottomUp)]
}

fn build(values: &[String]) -> Queue {
    let mut q = Queue::new();
    for value in values {
        q.insert_tail(value).unwrap();
    }
    q
}

fn contents(q: &Queue) -> Vec<String> {
    q.iter().map(str::to_owned).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Output is non-decreasing and a permutation of the input.
    #[test]
    fn sorted_permutation(values in prop::collection::vec(".{0,6}", 0..80), strategy in sort_strategy()) {
        let mut q = build(&values);
        q.sort_with(strategy);
        q.check_invariants();

        let sorted = contents(&q);
        prop_assert!(sorted.windows(2).all(|w| w[0].as_bytes() <= w[1].as_bytes()));

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    /// Sorting a sorted queue changes nothing.
    #[test]
    fn idempotent(values in prop::collection::vec("[a-e]{0,3}", 0..80), strategy in sort_strategy()) {
        let mut q = build(&values);
        q.sort_with(strategy);
        let once = contents(&q);
        q.sort_with(strategy);

        prop_assert_eq!(contents(&q), once);
    }

    /// Queues with fewer than two elements are left as they are.
    #[test]
    fn small_queues_untouched(values in prop::collection::vec(".{0,8}", 0..2), strategy in sort_strategy()) {
        let mut q = build(&values);
        q.sort_with(strategy);

        prop_assert_eq!(contents(&q), values);
        q.check_invariants();
    }

    /// Both strategies agree, and the tail is the maximum value.
    #[test]
    fn strategies_agree(values in prop::collection::vec("[a-z]{0,4}", 0..100)) {
        let mut recursive = build(&values);
        let mut bottom_up = build(&values);
        recursive.sort_with(SortStrategy::Recursive);
        bottom_up.sort_with(SortStrategy::BottomUp);

        prop_assert_eq!(contents(&recursive), contents(&bottom_up));
        prop_assert_eq!(recursive.peek_tail(), values.iter().max().map(String::as_str));
        prop_assert_eq!(recursive.value_bytes(), bottom_up.value_bytes());
    }

    /// Sorting then inserting at the tail keeps the chain consistent.
    #[test]
    fn tail_usable_after_sort(values in prop::collection::vec("[a-z]{1,3}", 0..40), extra in "[a-z]{1,3}") {
        let mut q = build(&values);
        q.sort();
        q.insert_tail(&extra).unwrap();
        q.check_invariants();

        prop_assert_eq!(q.peek_tail(), Some(extra.as_str()));
        prop_assert_eq!(q.len() as usize, values.len() + 1);
    }
}
