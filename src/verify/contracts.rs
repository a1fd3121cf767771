// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the container invariants.
//!
//! Debug-mode assertions the containers call after structural mutations. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!` or `cfg(debug_assertions)`)
//! 2. Fail at the mutation that broke the invariant, not at some later read
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function         | Invariant                                        |
//! |---------------------------|--------------------------------------------------|
//! | `check_array_capacity`    | `len <= capacity`                                |
//! | `check_node_linked`       | a node's neighbours link back to it              |
//! | `check_chain_well_formed` | the whole chain passes `verify_chain`            |
//!
//! `check_node_linked` is O(1) and runs on every link/unlink. The full chain walk
//! is O(n) and only runs after operations that rewrite every link.

use crate::linked::{LinkedSequence, NodeId};

#[cfg(debug_assertions)]
use super::verify_chain;

// ============================================================================
// ARRAY CONTRACTS
// ============================================================================

/// Check that the array never holds more elements than its capacity.
///
/// # Panics (debug builds only)
/// Panics if `len > capacity`.
#[inline]
pub fn check_array_capacity(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "Contract violation: array len {} > capacity {}",
        len,
        capacity
    );
}

// ============================================================================
// LINKED CONTRACTS
// ============================================================================

/// Check the links around one node.
///
/// # Panics (debug builds only)
/// Panics if `id` is vacant, if a neighbour does not link back, or if a missing
/// neighbour is not matched by `id` being the head or tail.
#[inline]
#[allow(unused_variables)]
pub(crate) fn check_node_linked<T>(list: &LinkedSequence<T>, id: NodeId) {
    #[cfg(debug_assertions)]
    {
        let Some((prev, next)) = list.links(id) else {
            panic!("Contract violation: node {:?} is vacant", id);
        };
        match prev {
            Some(prev) => debug_assert!(
                list.links(prev).and_then(|(_, n)| n) == Some(id),
                "Contract violation: predecessor of {:?} does not link forward to it",
                id
            ),
            None => debug_assert!(
                list.head_id() == Some(id),
                "Contract violation: {:?} has no predecessor but is not the head",
                id
            ),
        }
        match next {
            Some(next) => debug_assert!(
                list.links(next).and_then(|(p, _)| p) == Some(id),
                "Contract violation: successor of {:?} does not link back to it",
                id
            ),
            None => debug_assert!(
                list.tail_id() == Some(id),
                "Contract violation: {:?} has no successor but is not the tail",
                id
            ),
        }
    }
}

/// Check the whole chain: open ends, mirrored links, no cycle, `len` agrees.
///
/// # Panics (debug builds only)
/// Panics with the first `InvariantError` found.
#[inline]
#[allow(unused_variables)]
pub fn check_chain_well_formed<T>(list: &LinkedSequence<T>) {
    #[cfg(debug_assertions)]
    {
        if let Err(err) = verify_chain(list) {
            panic!("Contract violation: linked chain malformed - {}", err);
        }
    }
}
