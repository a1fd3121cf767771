// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for sorting under composed and malformed policies.
//!
//! Well-formed composites must agree with `slice::sort_by` on the equivalent
//! closure. Malformed policies (inconsistent or panicking) may produce any
//! order, but the result must be a permutation of the input and the chain must
//! stay well formed.

#![no_main]

use std::cell::Cell;
use std::cmp::Ordering;
use std::panic::{catch_unwind, AssertUnwindSafe};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ordseq::{
    comparing, natural, nulls_first, nulls_last, verify_chain, Compose, DynamicArraySequence,
    LinkedSequence, Sequence,
};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<(u8, Option<u8>)>,
    reverse_primary: bool,
    absent_first: bool,
    /// Comparison count after which the malformed policy panics.
    panic_after: u8,
    /// Seed for the inconsistent policy's answers.
    noise: u32,
}

fn sorted_copy(values: &[(u8, Option<u8>)]) -> Vec<(u8, Option<u8>)> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

fuzz_target!(|input: Input| {
    let values = input.values;

    // Well-formed: primary key (maybe reversed), then the optional field.
    let expected = {
        let mut copy = values.clone();
        copy.sort_by(|a, b| {
            let primary = if input.reverse_primary { b.0.cmp(&a.0) } else { a.0.cmp(&b.0) };
            primary.then_with(|| match (a.1, b.1) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) if input.absent_first => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) if input.absent_first => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(x), Some(y)) => x.cmp(&y),
            })
        });
        copy
    };

    let primary = comparing(|v: &(u8, Option<u8>)| v.0);
    let secondary_first = comparing_option(nulls_first(natural()));
    let secondary_last = comparing_option(nulls_last(natural()));

    let mut array = DynamicArraySequence::from(values.clone());
    let mut list = LinkedSequence::from(values.clone());
    match (input.reverse_primary, input.absent_first) {
        (false, true) => {
            let policy = primary.then_by(secondary_first);
            array.sort_with(&policy);
            list.sort_with(&policy);
        }
        (false, false) => {
            let policy = primary.then_by(secondary_last);
            array.sort_with(&policy);
            list.sort_with(&policy);
        }
        (true, true) => {
            let policy = primary.reversed().then_by(secondary_first);
            array.sort_with(&policy);
            list.sort_with(&policy);
        }
        (true, false) => {
            let policy = primary.reversed().then_by(secondary_last);
            array.sort_with(&policy);
            list.sort_with(&policy);
        }
    }
    assert_eq!(array.as_slice(), &expected[..]);
    assert_eq!(list.to_vec(), expected);
    assert!(verify_chain(&list).is_ok());

    // Malformed: inconsistent answers, then a panic part way through.
    let calls = Cell::new(0u32);
    let state = Cell::new(input.noise | 1);
    let chaotic = |_: &(u8, Option<u8>), _: &(u8, Option<u8>)| {
        calls.set(calls.get() + 1);
        if calls.get() > u32::from(input.panic_after) {
            panic!("policy gave up");
        }
        let mut x = state.get();
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state.set(x);
        match x % 3 {
            0 => Ordering::Less,
            1 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    };

    let mut array = DynamicArraySequence::from(values.clone());
    let _ = catch_unwind(AssertUnwindSafe(|| array.sort_with(&chaotic)));
    assert_eq!(sorted_copy(array.as_slice()), sorted_copy(&values));

    calls.set(0);
    let mut list = LinkedSequence::from(values.clone());
    let _ = catch_unwind(AssertUnwindSafe(|| list.sort_with(&chaotic)));
    assert!(verify_chain(&list).is_ok());
    assert_eq!(sorted_copy(&list.to_vec()), sorted_copy(&values));
});

/// Order pairs by their optional second field with `policy`.
fn comparing_option<P>(policy: P) -> impl ordseq::OrderingPolicy<(u8, Option<u8>)>
where
    P: ordseq::OrderingPolicy<Option<u8>>,
{
    ordseq::comparing_with(|v: &(u8, Option<u8>)| v.1, policy)
}
