// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The contract shared by both containers.
//!
//! | Operation            | `DynamicArraySequence` | `LinkedSequence`     |
//! |----------------------|------------------------|----------------------|
//! | `push`               | O(1) amortized         | O(1)                 |
//! | `get` / `set`        | O(1)                   | O(min(i, n - i))     |
//! | `insert_at`          | O(n - i)               | O(min(i, n - i))     |
//! | `remove_at`          | O(n - i)               | O(min(i, n - i))     |
//! | `remove_first_value` | O(n)                   | O(n)                 |
//! | `sort_with`          | O(n log n), stable     | O(n log n), stable   |
//!
//! The trait is object safe: callers choose the container at construction and can
//! hold either behind `&mut dyn Sequence<T>`.

use crate::error::Result;
use crate::ordering::OrderingPolicy;

/// Ordered, index-addressable collection.
///
/// Every fallible operation is all-or-nothing: on `Err` the sequence is unchanged.
pub trait Sequence<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append at the end.
    fn push(&mut self, value: T);

    /// Element at `index`; `IndexOutOfRange` unless `index < len`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replace the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    /// Insert so that `value` ends up at `index`; `IndexOutOfRange` unless `index <= len`.
    fn insert_at(&mut self, index: usize, value: T) -> Result<()>;

    /// Remove and return the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Remove the first element equal to `value`. Returns whether one was found.
    fn remove_first_value(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Stable sort of the whole sequence.
    fn sort_with(&mut self, policy: &dyn OrderingPolicy<T>);

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Position of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Drop every element.
    fn clear(&mut self);

    /// Copy the elements out in order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}
