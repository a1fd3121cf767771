//! Sorting properties: agreement with std, stability, idempotence, panic safety.

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::common::{by_tag_key, is_stable_order, sorted, tag_positions};
use super::oracles::keyed_values;
use ordseq::{
    comparing, natural, nulls_first, nulls_last, verify_array, verify_chain, Compose,
    DynamicArraySequence, LinkedSequence, OrderingPolicy, Sequence,
};
use proptest::prelude::*;

/// A natural-order policy that panics on its `limit`-th comparison.
fn panicking_after(limit: usize) -> impl Fn(&u8, &u8) -> std::cmp::Ordering {
    let calls = Cell::new(0usize);
    move |a: &u8, b: &u8| {
        calls.set(calls.get() + 1);
        if calls.get() >= limit {
            panic!("policy gave up after {} comparisons", limit);
        }
        a.cmp(b)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Both containers sort exactly like `slice::sort`.
    #[test]
    fn prop_sort_matches_std(values in keyed_values()) {
        let expected = sorted(&values);

        let mut array = DynamicArraySequence::from(values.clone());
        array.sort_with(&natural());
        prop_assert_eq!(array.as_slice(), &expected[..]);

        let mut list = LinkedSequence::from(values);
        list.sort_with(&natural());
        prop_assert_eq!(list.to_vec(), expected);
        prop_assert!(verify_chain(&list).is_ok());
    }

    /// Elements with equal keys keep their original relative order.
    #[test]
    fn prop_sort_is_stable(values in keyed_values()) {
        let tagged = tag_positions(&values);

        let mut array = DynamicArraySequence::from(tagged.clone());
        array.sort_with(&by_tag_key::<u8>());
        prop_assert!(is_stable_order(array.as_slice()));
        prop_assert!(by_tag_key::<u8>().is_sorted(array.as_slice()));

        let mut list = LinkedSequence::from(tagged);
        list.sort_with(&by_tag_key::<u8>());
        let sorted_list = list.to_vec();
        prop_assert!(is_stable_order(&sorted_list));
        prop_assert_eq!(sorted_list, array.to_vec());
    }

    /// Sorting an already sorted sequence changes nothing.
    #[test]
    fn prop_sort_is_idempotent(values in keyed_values()) {
        let policy = comparing(|v: &u8| v / 2).then_by(natural().reversed());

        let mut array = DynamicArraySequence::from(values.clone());
        array.sort_with(&policy);
        let once = array.to_vec();
        array.sort_with(&policy);
        prop_assert_eq!(array.to_vec(), once.clone());

        let mut list = LinkedSequence::from(values);
        list.sort_with(&policy);
        prop_assert_eq!(list.to_vec(), once.clone());
        list.sort_with(&policy);
        prop_assert_eq!(list.to_vec(), once);
    }

    /// `reversed` sorts into exactly the reverse of the stable ascending order
    /// when there are no ties.
    #[test]
    fn prop_reversed_reverses(values in prop::collection::btree_set(any::<i32>(), 0..40)) {
        let values: Vec<i32> = values.into_iter().collect();
        let mut list = LinkedSequence::from(values.clone());
        list.sort_with(&natural().reversed());
        let mut expected = values;
        expected.reverse();
        prop_assert_eq!(list.to_vec(), expected);
    }

    /// `nulls_first`/`nulls_last` put every `None` at one end and sort the rest.
    #[test]
    fn prop_nulls_placement(values in prop::collection::vec(prop::option::of(0u8..10), 0..40)) {
        let nones = values.iter().filter(|v| v.is_none()).count();
        let somes: Vec<Option<u8>> = sorted(&values).into_iter().filter(Option::is_some).collect();

        let mut first = DynamicArraySequence::from(values.clone());
        first.sort_with(&nulls_first(natural()));
        prop_assert!(first.iter().take(nones).all(Option::is_none));
        prop_assert_eq!(&first.as_slice()[nones..], &somes[..]);

        let mut last = LinkedSequence::from(values);
        last.sort_with(&nulls_last(natural()));
        let last = last.to_vec();
        prop_assert_eq!(&last[..somes.len()], &somes[..]);
        prop_assert!(last[somes.len()..].iter().all(Option::is_none));
    }

    /// A policy that panics mid-sort leaves both containers well formed with the
    /// same multiset of values.
    #[test]
    fn prop_panicking_policy_is_contained(
        values in prop::collection::vec(any::<u8>(), 2..60),
        limit in 1usize..100,
    ) {
        let expected = sorted(&values);

        let mut array = DynamicArraySequence::from(values.clone());
        let policy = panicking_after(limit);
        let _ = catch_unwind(AssertUnwindSafe(|| array.sort_with(&policy)));
        prop_assert!(verify_array(&array).is_ok());
        prop_assert_eq!(sorted(array.as_slice()), expected.clone());

        let mut list = LinkedSequence::from(values.clone());
        let policy = panicking_after(limit);
        let outcome = catch_unwind(AssertUnwindSafe(|| list.sort_with(&policy)));
        prop_assert!(verify_chain(&list).is_ok());
        if outcome.is_err() {
            // The chain is relinked only after the node order is fully decided.
            prop_assert_eq!(list.to_vec(), values);
        } else {
            prop_assert_eq!(list.to_vec(), expected);
        }
    }
}
