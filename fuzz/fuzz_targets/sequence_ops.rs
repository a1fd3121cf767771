// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for indexed and head/tail operations on both containers.
//!
//! Every operation is mirrored on a `Vec`. The containers must agree with it,
//! never panic on out-of-range input, and keep their structural invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ordseq::{
    verify_array, verify_chain, ArrayConfig, DynamicArraySequence, GrowthPolicy, LinkedSequence,
    Sequence, SequenceError,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Push(u8),
    PushFront(u8),
    PopFront,
    PopBack,
    Insert(u16, u8),
    Remove(u16),
    Get(u16),
    Set(u16, u8),
    RemoveValue(u8),
    RemoveMatching(u8),
    Reserve(u8),
    Compact,
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_capacity: u8,
    double: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let growth = if input.double {
        GrowthPolicy::Double
    } else {
        GrowthPolicy::OneAndHalf
    };
    let config = ArrayConfig::new(usize::from(input.initial_capacity), growth);
    let mut array = DynamicArraySequence::with_config(config);
    let mut list = LinkedSequence::new();
    let mut oracle: Vec<u8> = Vec::new();

    for op in input.ops {
        let len = oracle.len();
        match op {
            Op::Push(v) => {
                array.push(v);
                list.push_back(v);
                oracle.push(v);
            }
            Op::PushFront(v) => {
                array.insert_at(0, v).expect("front is always a valid position");
                list.push_front(v);
                oracle.insert(0, v);
            }
            Op::PopFront => {
                let expected = (!oracle.is_empty()).then(|| oracle.remove(0));
                assert_eq!(list.pop_front().ok(), expected);
                assert_eq!(array.remove_at(0).ok(), expected);
            }
            Op::PopBack => {
                let expected = oracle.pop();
                match expected {
                    Some(_) => assert_eq!(array.remove_at(len - 1).ok(), expected),
                    None => assert!(array.is_empty()),
                }
                assert_eq!(list.pop_back().ok(), expected);
            }
            Op::Insert(i, v) => {
                let i = usize::from(i);
                if i <= len {
                    oracle.insert(i, v);
                    array.insert_at(i, v).expect("checked position");
                    list.insert_at(i, v).expect("checked position");
                } else {
                    let err = SequenceError::IndexOutOfRange { index: i, len };
                    assert_eq!(array.insert_at(i, v), Err(err.clone()));
                    assert_eq!(list.insert_at(i, v), Err(err));
                }
            }
            Op::Remove(i) => {
                let i = usize::from(i);
                let expected = (i < len).then(|| oracle.remove(i));
                assert_eq!(array.remove_at(i).ok(), expected);
                assert_eq!(list.remove_at(i).ok(), expected);
            }
            Op::Get(i) => {
                let i = usize::from(i);
                assert_eq!(array.get(i).ok(), oracle.get(i));
                assert_eq!(list.get(i).ok(), oracle.get(i));
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                let expected = oracle.get_mut(i).map(|slot| std::mem::replace(slot, v));
                assert_eq!(array.set(i, v).ok(), expected);
                assert_eq!(list.set(i, v).ok(), expected);
            }
            Op::RemoveValue(v) => {
                let expected = match oracle.iter().position(|x| *x == v) {
                    Some(at) => {
                        oracle.remove(at);
                        true
                    }
                    None => false,
                };
                assert_eq!(array.remove_first_value(&v), expected);
                assert_eq!(list.remove_first_value(&v), expected);
            }
            Op::RemoveMatching(modulus) => {
                let modulus = modulus.max(1);
                let before = oracle.len();
                oracle.retain(|x| x % modulus != 0);
                let removed = before - oracle.len();
                assert_eq!(array.remove_if(|x| x % modulus == 0), removed);
                assert_eq!(list.remove_all_matching(|x| x % modulus == 0), removed);
            }
            Op::Reserve(additional) => {
                let before = array.capacity();
                array.reserve(usize::from(additional));
                assert!(array.capacity() >= before);
                assert!(array.capacity() >= len + usize::from(additional));
            }
            Op::Compact => {
                array.compact();
                assert_eq!(array.capacity(), array.len());
            }
            Op::Clear => {
                array.clear();
                list.clear();
                oracle.clear();
            }
        }

        assert!(verify_array(&array).is_ok());
    }

    assert_eq!(array.as_slice(), &oracle[..]);
    assert!(verify_chain(&list).is_ok(), "chain malformed: {:?}", verify_chain(&list));
    assert_eq!(list.to_vec(), oracle);
});
