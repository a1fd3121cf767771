// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplicating them in every test file.

#![doc(hidden)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ordering::{comparing, OrderingPolicy};

/// Example record with two orderable fields, used as a multi-key sort subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub age: u32,
    pub name: String,
}

impl Record {
    pub fn new(age: u32, name: &str) -> Self {
        Self {
            age,
            name: name.to_string(),
        }
    }

    /// Age ascending.
    pub fn by_age() -> impl OrderingPolicy<Record> + Clone {
        comparing(|r: &Record| r.age)
    }

    /// Name ascending.
    pub fn by_name() -> impl OrderingPolicy<Record> + Clone {
        |a: &Record, b: &Record| a.name.cmp(&b.name)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.age, self.name)
    }
}

/// Build records from `(age, name)` pairs.
pub fn make_records(pairs: &[(u32, &str)]) -> Vec<Record> {
    pairs
        .iter()
        .map(|&(age, name)| Record::new(age, name))
        .collect()
}

/// Pair each key with its original position so stability can be observed after a sort.
pub fn tag_positions<K: Clone>(keys: &[K]) -> Vec<(K, usize)> {
    keys.iter()
        .cloned()
        .enumerate()
        .map(|(position, key)| (key, position))
        .collect()
}

/// Ordering on the key half of a tagged pair only; ties are left to stability.
pub fn by_tag_key<K: Ord>() -> impl OrderingPolicy<(K, usize)> + Clone {
    |a: &(K, usize), b: &(K, usize)| a.0.cmp(&b.0)
}

/// Whether tagged pairs with equal keys still appear in ascending position order.
pub fn is_stable_order<K: Eq>(tagged: &[(K, usize)]) -> bool {
    tagged
        .windows(2)
        .all(|pair| pair[0].0 != pair[1].0 || pair[0].1 < pair[1].1)
}
