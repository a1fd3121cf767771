//! Operation model and reference implementations.
//!
//! Each operation is applied to the container under test and to a plain std
//! collection. If they disagree, the oracle is right.

use std::collections::VecDeque;

use proptest::prelude::*;

/// One step of a random workload. Indices are taken modulo the current length
/// (plus one for insertions) so most generated steps are in range, and the
/// `Raw*` variants deliberately aren't.
#[derive(Debug, Clone)]
pub enum Op {
    Push(i16),
    PushFront(i16),
    PopFront,
    PopBack,
    Insert(usize, i16),
    Remove(usize),
    Set(usize, i16),
    RemoveValue(i16),
    RawGet(usize),
    RawRemove(usize),
    Clear,
}

pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i16>().prop_map(Op::Push),
        2 => any::<i16>().prop_map(Op::PushFront),
        1 => Just(Op::PopFront),
        1 => Just(Op::PopBack),
        3 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Remove),
        2 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => (-4i16..4).prop_map(Op::RemoveValue),
        1 => (0usize..40).prop_map(Op::RawGet),
        1 => (0usize..40).prop_map(Op::RawRemove),
        1 => Just(Op::Clear),
    ]
}

pub fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..120)
}

/// Small values so duplicates (and therefore stability) actually matter.
pub fn keyed_values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..6, 0..80)
}

/// Map a raw index into `0..len`, `None` for an empty collection.
pub fn element_index(raw: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| raw % len)
}

/// Map a raw index into `0..=len`.
pub fn position_index(raw: usize, len: usize) -> usize {
    raw % (len + 1)
}

/// Oracle: first-match removal on a `Vec`.
pub fn oracle_remove_first<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool {
    match items.iter().position(|item| item == value) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Oracle: first-match removal on a `VecDeque`.
pub fn oracle_remove_first_deque<T: PartialEq>(items: &mut VecDeque<T>, value: &T) -> bool {
    match items.iter().position(|item| item == value) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
