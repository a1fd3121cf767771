// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Doubly linked sequence backed by a node arena.
//!
//! Nodes live in a `Vec` of slots and refer to each other by [`NodeId`] instead of
//! by pointer, so the list owns every node exclusively and the crate needs no
//! `unsafe`. Removed slots go on a free list and are reused by later insertions.
//!
//! ```text
//!  slots:  [0]          [1]          [2]          [3]
//!          ┌────────┐   ┌────────┐   ┌────────┐   ┌────────┐
//!          │ "Cat"  │   │ vacant │   │ "Dog"  │   │ "Cow"  │
//!          │ p:2 n:3│   │ free:- │   │ p:- n:0│   │ p:0 n:-│
//!          └────────┘   └────────┘   └────────┘   └────────┘
//!
//!  chain:  head ─▶ [2] "Dog" ⇄ [0] "Cat" ⇄ [3] "Cow" ◀─ tail
//!  free:   [1]
//! ```
//!
//! # Invariants
//!
//! - `head.prev` and `tail.next` are `None`
//! - the chain is acyclic and `next`/`prev` links mirror each other
//! - `len` equals the number of nodes reachable from `head`
//!
//! Every structural change bumps a modification counter; a [`Cursor`] remembers the
//! count it last saw and refuses to operate once the list changed behind its back.

mod cursor;

pub use cursor::{Cursor, CursorState};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{check_position_index, Result, SequenceError};
use crate::ordering::OrderingPolicy;
use crate::sequence::Sequence;
use crate::verify::contracts::{check_chain_well_formed, check_node_linked};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one list instance. Clones get a fresh identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    fn fresh() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Stable handle to a node slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// Doubly linked list with O(1) head/tail operations and checked cursors.
pub struct LinkedSequence<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    modifications: u64,
    id: ListId,
}

impl<T> LinkedSequence<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
            modifications: 0,
            id: ListId::fresh(),
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head, value);
    }

    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Remove and return the first element; `EmptySequence` when empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let id = self.head.ok_or(SequenceError::EmptySequence)?;
        Ok(self.unlink(id))
    }

    /// Remove and return the last element; `EmptySequence` when empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let id = self.tail.ok_or(SequenceError::EmptySequence)?;
        Ok(self.unlink(id))
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.node(id).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.node(id).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let id = self.locate(index)?;
        Ok(&mut self.node_mut(id).value)
    }

    /// Remove every element satisfying `predicate` in a single pass, keeping the
    /// survivors in order. Returns the number removed.
    pub fn remove_all_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id);
            cursor = node.next;
            if predicate(&node.value) {
                self.unlink(id);
                removed += 1;
            }
        }
        removed
    }

    /// Remove every element equal to some value in `others`.
    ///
    /// Returns whether at least one element was removed. O(n·m) for `m` values.
    pub fn remove_all_in<'a, I>(&mut self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: PartialEq + 'a,
    {
        let others: Vec<&T> = others.into_iter().collect();
        if others.is_empty() {
            return false;
        }
        self.remove_all_matching(|value| others.contains(&value)) > 0
    }

    /// Append every element of `values` at the back (`addAll`).
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }

    /// Cursor positioned before the head.
    pub fn open_cursor(&self) -> Cursor {
        Cursor::new(self.id, self.modifications, self.head, 0)
    }

    /// Cursor positioned so that `next` returns the element at `index`.
    ///
    /// `index == len` positions it after the tail, ready for backward traversal.
    pub fn open_cursor_at(&self, index: usize) -> Result<Cursor> {
        check_position_index(index, self.len)?;
        let next = if index == self.len {
            None
        } else {
            Some(self.locate(index)?)
        };
        Ok(Cursor::new(self.id, self.modifications, next, index))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // =========================================================================
    // NODE LIFECYCLE
    // =========================================================================

    fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("node {:?} is vacant", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("node {:?} is vacant", id),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free {
            Some(id) => {
                let slot = std::mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                if let Slot::Vacant { next_free } = slot {
                    self.free = next_free;
                }
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        let slot = std::mem::replace(&mut self.slots[id.0], vacant);
        self.free = Some(id);
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("released vacant node {:?}", id),
        }
    }

    /// Link a new node holding `value` before `at`, or at the tail when `at` is `None`.
    pub(crate) fn link_before(&mut self, at: Option<NodeId>, value: T) -> NodeId {
        let prev = match at {
            Some(next) => self.node(next).prev,
            None => self.tail,
        };
        let id = self.alloc(Node {
            value,
            prev,
            next: at,
        });
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(id),
            None => self.head = Some(id),
        }
        match at {
            Some(next) => self.node_mut(next).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
        self.bump();
        check_node_linked(self, id);
        id
    }

    /// Detach `id` from the chain and return its value.
    pub(crate) fn unlink(&mut self, id: NodeId) -> T {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.bump();
        if let Some(neighbour) = prev.or(next) {
            check_node_linked(self, neighbour);
        }
        self.release(id)
    }

    /// Walk from whichever end is closer.
    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|id| self.node(id).next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cursor = cursor.and_then(|id| self.node(id).prev);
            }
            cursor
        }
    }

    fn locate(&self, index: usize) -> Result<NodeId> {
        self.node_at(index)
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    fn bump(&mut self) {
        self.modifications = self.modifications.wrapping_add(1);
    }

    /// Rewrite every link so the chain visits `order` front to back.
    fn relink(&mut self, order: &[NodeId]) {
        self.head = order.first().copied();
        self.tail = order.last().copied();
        for (position, &id) in order.iter().enumerate() {
            let prev = position.checked_sub(1).map(|p| order[p]);
            let next = order.get(position + 1).copied();
            let node = self.node_mut(id);
            node.prev = prev;
            node.next = next;
        }
    }

    // =========================================================================
    // INSPECTION (used by the cursor and by verify)
    // =========================================================================

    pub(crate) fn modifications(&self) -> u64 {
        self.modifications
    }

    pub(crate) fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// `(prev, next)` of an occupied slot, `None` for vacant or unknown ids.
    pub(crate) fn links(&self, id: NodeId) -> Option<(Option<NodeId>, Option<NodeId>)> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some((node.prev, node.next)),
            _ => None,
        }
    }

    pub(crate) fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    pub(crate) fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).value
    }

    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(id) = cursor {
            ids.push(id);
            cursor = self.node(id).next;
        }
        ids
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for LinkedSequence<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn get(&self, index: usize) -> Result<&T> {
        let id = self.locate(index)?;
        Ok(&self.node(id).value)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        let id = self.locate(index)?;
        Ok(std::mem::replace(&mut self.node_mut(id).value, value))
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        check_position_index(index, self.len)?;
        let at = if index == self.len {
            None
        } else {
            Some(self.locate(index)?)
        };
        self.link_before(at, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let id = self.locate(index)?;
        Ok(self.unlink(id))
    }

    fn remove_first_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id);
            if node.value == *value {
                self.unlink(id);
                return true;
            }
            cursor = node.next;
        }
        false
    }

    /// Sorts node handles by value and relinks the chain; values never move and no
    /// node is allocated. A panicking policy leaves the chain as it was.
    fn sort_with(&mut self, policy: &dyn OrderingPolicy<T>) {
        let mut order = self.node_ids();
        order.sort_by(|&a, &b| policy.compare(&self.node(a).value, &self.node(b).value));
        self.relink(&order);
        self.bump();
        check_chain_well_formed(self);
        debug!(len = self.len, "sorted linked sequence");
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .rev()
            .position(|item| item == value)
            .map(|from_back| self.len - 1 - from_back)
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.bump();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// ITERATION
// =============================================================================

/// Borrowing front-to-back iterator. Double ended.
pub struct Iter<'a, T> {
    list: &'a LinkedSequence<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator, drains from both ends.
pub struct IntoIter<T> {
    list: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.append_all(iter);
        list
    }
}

impl<T> From<Vec<T>> for LinkedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for LinkedSequence<T> {
    fn from(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    /// Copies the values into a compact arena under a new [`ListId`].
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: Serialize> Serialize for LinkedSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
