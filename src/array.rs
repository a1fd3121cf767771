// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contiguous, index-addressable, resizable sequence.
//!
//! ```text
//!  index:   0   1   2   3   4   5   6   7   8   9
//!         ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
//!         │ a │ b │ c │ d │ e │   │   │   │   │   │
//!         └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
//!          ◀──────── len ───────▶
//!          ◀──────────────── capacity ──────────────▶
//! ```
//!
//! # Invariants
//!
//! - `len <= capacity`
//! - elements occupy `[0, len)` with no gaps
//! - capacity only grows, except through [`DynamicArraySequence::compact`]
//!
//! Capacity is tracked explicitly and grown per [`GrowthPolicy`](crate::GrowthPolicy),
//! so the growth schedule is deterministic and observable. The backing `Vec` is
//! always reserved to at least the logical capacity.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::config::ArrayConfig;
use crate::error::{check_element_index, check_position_index, Result};
use crate::ordering::OrderingPolicy;
use crate::sequence::Sequence;
use crate::verify::contracts::check_array_capacity;

/// Growable array with an explicit, policy-driven capacity.
#[derive(Clone)]
pub struct DynamicArraySequence<T> {
    items: Vec<T>,
    capacity: usize,
    config: ArrayConfig,
}

impl<T> DynamicArraySequence<T> {
    /// Empty array with nothing allocated; the first append reserves
    /// `ArrayConfig::default().initial_capacity`.
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    /// Empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reserve_exact_capacity(capacity);
        array
    }

    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
            config,
        }
    }

    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Number of elements that fit before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Make room for at least `additional` more elements, growing per policy.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.items.len().saturating_add(additional);
        if required > self.capacity {
            self.grow(required);
        }
    }

    /// Reduce capacity to the current length.
    pub fn compact(&mut self) {
        let before = self.capacity;
        self.items.shrink_to_fit();
        self.capacity = self.items.len();
        debug!(from = before, to = self.capacity, "compacted dynamic array");
        check_array_capacity(self.items.len(), self.capacity);
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_element_index(index, self.items.len())?;
        Ok(&mut self.items[index])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Append every element of `values` in order (`addAll`).
    pub fn extend_from<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.reserve(lower);
        for value in values {
            self.push(value);
        }
    }

    /// Remove every element matching `predicate`, keeping survivors in order.
    /// Returns the number removed.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Drop every element and release the backing store.
    pub fn clear_and_compact(&mut self) {
        self.items.clear();
        self.compact();
    }

    fn ensure_room_for_one(&mut self) {
        if self.items.len() == self.capacity {
            self.grow(self.items.len().saturating_add(1));
        }
    }

    fn grow(&mut self, required: usize) {
        let from = self.capacity;
        let to = self
            .config
            .growth
            .next_capacity(from, required, self.config.initial_capacity);
        self.reserve_exact_capacity(to);
        trace!(from, to, len = self.items.len(), "grew dynamic array");
    }

    fn reserve_exact_capacity(&mut self, capacity: usize) {
        if capacity > self.capacity {
            self.items.reserve_exact(capacity - self.items.len());
            self.capacity = capacity;
        }
        check_array_capacity(self.items.len(), self.capacity);
    }
}

impl<T> Default for DynamicArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for DynamicArraySequence<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, value: T) {
        self.ensure_room_for_one();
        self.items.push(value);
        check_array_capacity(self.items.len(), self.capacity);
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_element_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        check_element_index(index, self.items.len())?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        check_position_index(index, self.items.len())?;
        self.ensure_room_for_one();
        self.items.insert(index, value);
        check_array_capacity(self.items.len(), self.capacity);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        check_element_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    fn remove_first_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn sort_with(&mut self, policy: &dyn OrderingPolicy<T>) {
        self.items.sort_by(|a, b| policy.compare(a, b));
        debug!(len = self.items.len(), "sorted dynamic array");
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|item| item == value)
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl<T> From<Vec<T>> for DynamicArraySequence<T> {
    /// Takes ownership of `items`; capacity starts equal to the length.
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len();
        Self {
            items,
            capacity,
            config: ArrayConfig::default(),
        }
    }
}

impl<T: Clone> From<&[T]> for DynamicArraySequence<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> FromIterator<T> for DynamicArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for DynamicArraySequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_from(iter);
    }
}

impl<T> IntoIterator for DynamicArraySequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArraySequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for DynamicArraySequence<T> {
    /// Element-wise; capacity and configuration are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynamicArraySequence<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: Serialize> Serialize for DynamicArraySequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArraySequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
