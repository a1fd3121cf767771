// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validators and a type wrapper that make invalid states unrepresentable.
//!
//! | Check          | Guarantees                                                   |
//! |----------------|--------------------------------------------------------------|
//! | `verify_array` | `len <= capacity`                                            |
//! | `verify_chain` | head/tail ends are open, links mirror, acyclic, `len` agrees |
//! | `SortedBy`     | non-decreasing under the stored policy                       |
//!
//! # Example
//!
//! ```ignore
//! // Construction validates everything
//! let sorted = SortedBy::new(values, natural())?;
//!
//! // Binary search is sound because the order was checked up front
//! let position = sorted.find(&probe);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::array::DynamicArraySequence;
use crate::linked::{LinkedSequence, NodeId};
use crate::ordering::OrderingPolicy;
use crate::sequence::Sequence;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// More elements than the array claims to have room for.
    LenExceedsCapacity { len: usize, capacity: usize },
    /// The head node has a predecessor.
    HeadHasPredecessor,
    /// The tail node has a successor.
    TailHasSuccessor,
    /// Head and tail disagree about whether the list is empty, or the walk from
    /// head did not end at tail.
    TailMismatch,
    /// A link points at a vacant or nonexistent slot.
    DanglingLink { position: usize },
    /// `next.prev` does not point back at the node it was reached from.
    BrokenBackLink { position: usize },
    /// The walk from head visited more nodes than the arena holds.
    CycleDetected,
    /// Stored length differs from the number of reachable nodes.
    LengthMismatch { claimed: usize, actual: usize },
    /// Element at `position` is greater than its successor.
    UnsortedAt { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LenExceedsCapacity { len, capacity } => {
                write!(f, "len {} > capacity {}", len, capacity)
            }
            InvariantError::HeadHasPredecessor => write!(f, "head has a predecessor"),
            InvariantError::TailHasSuccessor => write!(f, "tail has a successor"),
            InvariantError::TailMismatch => write!(f, "walk from head does not end at tail"),
            InvariantError::DanglingLink { position } => {
                write!(f, "link after position {} points at a vacant slot", position)
            }
            InvariantError::BrokenBackLink { position } => {
                write!(f, "node at position {} does not link back", position)
            }
            InvariantError::CycleDetected => write!(f, "chain contains a cycle"),
            InvariantError::LengthMismatch { claimed, actual } => {
                write!(f, "len {} but {} nodes reachable", claimed, actual)
            }
            InvariantError::UnsortedAt { position } => {
                write!(f, "not sorted at position {}", position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check `len <= capacity`.
pub fn verify_array<T>(array: &DynamicArraySequence<T>) -> Result<(), InvariantError> {
    if array.len() > array.capacity() {
        return Err(InvariantError::LenExceedsCapacity {
            len: array.len(),
            capacity: array.capacity(),
        });
    }
    Ok(())
}

/// Walk the chain from head and check every structural invariant.
///
/// Never panics, even on a corrupted arena: the walk is bounded by the slot count.
pub fn verify_chain<T>(list: &LinkedSequence<T>) -> Result<(), InvariantError> {
    let (head, tail) = match (list.head_id(), list.tail_id()) {
        (None, None) => {
            return match list.len() {
                0 => Ok(()),
                claimed => Err(InvariantError::LengthMismatch { claimed, actual: 0 }),
            };
        }
        (Some(head), Some(tail)) => (head, tail),
        _ => return Err(InvariantError::TailMismatch),
    };

    let (head_prev, _) = list
        .links(head)
        .ok_or(InvariantError::DanglingLink { position: 0 })?;
    if head_prev.is_some() {
        return Err(InvariantError::HeadHasPredecessor);
    }
    let (_, tail_next) = list
        .links(tail)
        .ok_or(InvariantError::DanglingLink { position: 0 })?;
    if tail_next.is_some() {
        return Err(InvariantError::TailHasSuccessor);
    }

    let mut current: NodeId = head;
    let mut visited = 1;
    loop {
        let Some((_, next)) = list.links(current) else {
            return Err(InvariantError::DanglingLink {
                position: visited - 1,
            });
        };
        let Some(next) = next else { break };
        if visited > list.slot_count() {
            return Err(InvariantError::CycleDetected);
        }
        let (next_prev, _) = list
            .links(next)
            .ok_or(InvariantError::DanglingLink {
                position: visited - 1,
            })?;
        if next_prev != Some(current) {
            return Err(InvariantError::BrokenBackLink { position: visited });
        }
        current = next;
        visited += 1;
    }

    if current != tail {
        return Err(InvariantError::TailMismatch);
    }
    if visited != list.len() {
        return Err(InvariantError::LengthMismatch {
            claimed: list.len(),
            actual: visited,
        });
    }
    Ok(())
}

/// Position of the first adjacent pair out of order under `policy`.
pub fn first_unsorted<T, P>(items: &[T], policy: &P) -> Option<usize>
where
    P: OrderingPolicy<T> + ?Sized,
{
    items
        .windows(2)
        .position(|pair| policy.compare(&pair[0], &pair[1]) == Ordering::Greater)
        .map(|position| position + 1)
}

/// Values checked at construction to be non-decreasing under `policy`.
///
/// The policy travels with the values so lookups use the same order the check did.
#[derive(Debug, Clone)]
pub struct SortedBy<T, P> {
    items: Vec<T>,
    policy: P,
}

impl<T, P: OrderingPolicy<T>> SortedBy<T, P> {
    /// Validate an existing order.
    pub fn new(items: Vec<T>, policy: P) -> Result<Self, InvariantError> {
        if let Some(position) = first_unsorted(&items, &policy) {
            return Err(InvariantError::UnsortedAt { position });
        }
        Ok(Self { items, policy })
    }

    /// Stable-sort `items` with `policy`, which makes validation unnecessary.
    pub fn sort(mut items: Vec<T>, policy: P) -> Self {
        items.sort_by(|a, b| policy.compare(a, b));
        Self { items, policy }
    }

    /// Copy out of any sequence and sort.
    pub fn from_sequence<S>(sequence: &S, policy: P) -> Self
    where
        S: Sequence<T> + ?Sized,
        T: Clone,
    {
        Self::sort(sequence.to_vec(), policy)
    }

    /// Index of the first element equal to `probe` under the policy.
    pub fn find(&self, probe: &T) -> Option<usize> {
        let position = self
            .items
            .partition_point(|item| self.policy.compare(item, probe) == Ordering::Less);
        match self.items.get(position) {
            Some(item) if self.policy.compare(item, probe) == Ordering::Equal => Some(position),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}
