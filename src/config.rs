// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capacity configuration for [`DynamicArraySequence`](crate::DynamicArraySequence).
//!
//! The defaults match the classic array-list behaviour: nothing is allocated until
//! the first append, which reserves room for 10 elements; after that every full
//! append grows capacity by half.
//!
//! ```text
//! capacity:  0 ──append──▶ 10 ──▶ 15 ──▶ 22 ──▶ 33 ──▶ 49 ...   (OneAndHalf)
//!            0 ──append──▶ 10 ──▶ 20 ──▶ 40 ──▶ 80 ...         (Double)
//! ```
//!
//! Both types deserialize with serde and fill missing fields from `Default`, so a
//! caller can keep them in whatever configuration format it already uses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capacity reserved by the first append to an empty, unallocated array.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// How capacity grows when an append finds the array full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GrowthPolicy {
    /// `new = old + old / 2`
    #[default]
    OneAndHalf,
    /// `new = old * 2`
    Double,
    /// `new = old * numerator / denominator`, which must exceed `old`.
    Factor { numerator: usize, denominator: usize },
}

impl GrowthPolicy {
    /// The capacity to grow to from `current` so that at least `required` elements fit.
    ///
    /// Never returns less than `required`, never less than `current`, and saturates
    /// instead of overflowing.
    pub fn next_capacity(&self, current: usize, required: usize, initial: usize) -> usize {
        if current == 0 {
            return initial.max(required);
        }
        let grown = match *self {
            GrowthPolicy::OneAndHalf => current.saturating_add(current >> 1),
            GrowthPolicy::Double => current.saturating_mul(2),
            GrowthPolicy::Factor {
                numerator,
                denominator,
            } => (current / denominator.max(1)).saturating_mul(numerator),
        };
        grown.max(current.saturating_add(1)).max(required)
    }
}

/// Error returned by [`ArrayConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A `Factor` policy that would not grow (`numerator <= denominator`) or divides by zero.
    NonGrowingFactor { numerator: usize, denominator: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonGrowingFactor {
                numerator,
                denominator,
            } => write!(
                f,
                "growth factor {}/{} must be greater than 1",
                numerator, denominator
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Capacity settings for a dynamic array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Capacity reserved by the first growth of an unallocated array.
    pub initial_capacity: usize,
    pub growth: GrowthPolicy,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth: GrowthPolicy::default(),
        }
    }
}

impl ArrayConfig {
    pub fn new(initial_capacity: usize, growth: GrowthPolicy) -> Self {
        Self {
            initial_capacity,
            growth,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let GrowthPolicy::Factor {
            numerator,
            denominator,
        } = self.growth
        {
            if denominator == 0 || numerator <= denominator {
                return Err(ConfigError::NonGrowingFactor {
                    numerator,
                    denominator,
                });
            }
        }
        Ok(())
    }
}
