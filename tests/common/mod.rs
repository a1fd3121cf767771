//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fmt::Debug;

use ordseq::{verify_array, verify_chain, DynamicArraySequence, LinkedSequence, Sequence};

// Re-export canonical test utilities from ordseq::testing
pub use ordseq::testing::{by_tag_key, is_stable_order, make_records, tag_positions, Record};

// ============================================================================
// FIXTURES
// ============================================================================

/// The "working list" used throughout the array walkthroughs.
pub const LANGUAGES: [&str; 4] = ["Java", "Python", "JavaScript", "Java"];

pub const ANIMALS: [&str; 4] = ["Dog", "Cat", "Goat", "Cow"];

/// `[(24,"B"), (24,"A"), (32,"C")]`: two records tied on age.
pub fn tied_records() -> Vec<Record> {
    make_records(&[(24, "B"), (24, "A"), (32, "C")])
}

// ============================================================================
// INVARIANT ASSERTIONS
// ============================================================================

/// Assert the chain is well formed and holds exactly `expected`.
pub fn assert_linked<T: PartialEq + Clone + Debug>(list: &LinkedSequence<T>, expected: &[T]) {
    if let Err(err) = verify_chain(list) {
        panic!("linked chain malformed: {}", err);
    }
    assert_eq!(list.to_vec(), expected);
}

/// Assert `len <= capacity` and the array holds exactly `expected`.
pub fn assert_array<T: PartialEq + Clone + Debug>(
    array: &DynamicArraySequence<T>,
    expected: &[T],
) {
    if let Err(err) = verify_array(array) {
        panic!("array malformed: {}", err);
    }
    assert_eq!(array.as_slice(), expected);
}

/// Run the same check against both containers built from `items`.
pub fn for_both<T, F>(items: &[T], mut check: F)
where
    T: Clone,
    F: FnMut(&mut dyn Sequence<T>),
{
    let mut array = DynamicArraySequence::from(items);
    check(&mut array);
    let mut list = LinkedSequence::from(items);
    check(&mut list);
}

/// Sorted copy under the natural order, for comparing multisets.
pub fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.sort();
    items
}
