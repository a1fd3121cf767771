// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for ordseq capacity arithmetic.
//!
//! This standalone crate extracts the growth schedule and index checks of the
//! dynamic array and proves them over every `usize` input using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: `next_capacity` never overflows, for any policy
//! 2. **Room**: the result always fits the required length
//! 3. **Progress**: a non-empty array always grows by at least one slot
//! 4. **Bounds**: element checks accept exactly `index < len`, position checks `index <= len`

/// Capacity reserved by the first growth of an unallocated array.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

// ============================================================================
// GROWTH SCHEDULE (copied from src/config.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPolicy {
    OneAndHalf,
    Double,
    Factor { numerator: usize, denominator: usize },
}

impl GrowthPolicy {
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

// ============================================================================
// INDEX CHECKS (copied from src/error.rs)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

pub fn check_element_index(index: usize, len: usize) -> Result<(), IndexOutOfRange> {
    if index < len {
        Ok(())
    } else {
        Err(IndexOutOfRange { index, len })
    }
}

pub fn check_position_index(index: usize, len: usize) -> Result<(), IndexOutOfRange> {
    if index <= len {
        Ok(())
    } else {
        Err(IndexOutOfRange { index, len })
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_policy() -> GrowthPolicy {
        match kani::any::<u8>() % 3 {
            0 => GrowthPolicy::OneAndHalf,
            1 => GrowthPolicy::Double,
            _ => GrowthPolicy::Factor {
                numerator: kani::any(),
                denominator: kani::any(),
            },
        }
    }

    /// Verify next_capacity never panics and always makes room.
    #[kani::proof]
    fn verify_next_capacity_fits_required() {
        let policy = any_policy();
        let current: usize = kani::any();
        let required: usize = kani::any();
        let initial: usize = kani::any();

        let next = policy.next_capacity(current, required, initial);

        kani::assert(next >= required, "next_capacity must fit the required length");
        kani::assert(next >= current, "next_capacity must never shrink");
    }

    /// Verify a non-empty array always grows, even under a flat Factor policy.
    #[kani::proof]
    fn verify_next_capacity_progress() {
        let policy = any_policy();
        let current: usize = kani::any_where(|&c| c > 0 && c < usize::MAX);
        let required: usize = kani::any();

        let next = policy.next_capacity(current, required, DEFAULT_INITIAL_CAPACITY);

        kani::assert(next > current, "growth must add at least one slot");
    }

    /// Verify the first growth honours the initial capacity.
    #[kani::proof]
    fn verify_first_growth_uses_initial() {
        let policy = any_policy();
        let required: usize = kani::any_where(|&r| r <= DEFAULT_INITIAL_CAPACITY);

        let next = policy.next_capacity(0, required, DEFAULT_INITIAL_CAPACITY);

        kani::assert(
            next == DEFAULT_INITIAL_CAPACITY,
            "first growth must reserve the initial capacity",
        );
    }

    /// Verify the index checks accept exactly the documented ranges.
    #[kani::proof]
    fn verify_index_checks_are_exact() {
        let index: usize = kani::any();
        let len: usize = kani::any();

        kani::assert(
            check_element_index(index, len).is_ok() == (index < len),
            "element check must accept exactly index < len",
        );
        kani::assert(
            check_position_index(index, len).is_ok() == (index <= len),
            "position check must accept exactly index <= len",
        );
        if let Err(err) = check_element_index(index, len) {
            kani::assert(
                err.index == index && err.len == len,
                "error must carry the rejected index and length",
            );
        }
    }
}
