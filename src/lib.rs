// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered sequences with pluggable ordering policies.
//!
//! Two containers behind one [`Sequence`] trait, plus a small algebra of comparators
//! for sorting them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────┐     ┌──────────────────┐
//! │ ordering.rs  │────▶│     sequence.rs      │◀────│    error.rs      │
//! │ (policies,   │     │  (Sequence trait)    │     │ (SequenceError,  │
//! │  combinators)│     └──────────────────────┘     │  CursorFault)    │
//! └──────────────┘          ▲            ▲          └──────────────────┘
//!                           │            │
//!          ┌────────────────┴──┐   ┌─────┴──────────────────┐
//!          │     array.rs      │   │      linked/           │
//!          │ (DynamicArray-    │   │ (LinkedSequence,       │
//!          │  Sequence,        │   │  Cursor, node arena)   │
//!          │  config.rs)       │   │                        │
//!          └───────────────────┘   └────────────────────────┘
//!                    │                        │
//!                    ▼                        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       verify/                           │
//! │  (verify_chain, verify_array, SortedBy, contracts)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ordseq::{comparing, natural, Compose, DynamicArraySequence, LinkedSequence, Sequence};
//!
//! let mut scores: DynamicArraySequence<i32> = vec![1, 20, 3, 9, 5].into();
//! scores.sort_with(&natural().reversed());
//! assert_eq!(scores.to_vec(), vec![20, 9, 5, 3, 1]);
//!
//! let mut words: LinkedSequence<&str> = vec!["pear", "fig", "apple"].into();
//! words.sort_with(&comparing(|w: &&str| w.len()).then_by(natural()));
//! assert_eq!(words.to_vec(), vec!["fig", "pear", "apple"]);
//!
//! let mut cursor = words.open_cursor();
//! while let Some(word) = cursor.next(&words)? {
//!     if word.starts_with('p') {
//!         cursor.remove_current(&mut words)?;
//!     }
//! }
//! assert_eq!(words.to_vec(), vec!["fig", "apple"]);
//! # Ok::<(), ordseq::SequenceError>(())
//! ```

// Module declarations
pub mod array;
pub mod config;
pub mod error;
pub mod linked;
pub mod ordering;
pub mod sequence;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use array::DynamicArraySequence;
pub use config::{ArrayConfig, ConfigError, GrowthPolicy, DEFAULT_INITIAL_CAPACITY};
pub use error::{CursorFault, Result, SequenceError};
pub use linked::{Cursor, CursorState, LinkedSequence, ListId};
pub use ordering::{
    case_insensitive, comparing, comparing_with, natural, nulls_first, nulls_last, reverse_order,
    ByKey, CaseInsensitive, Compose, Natural, NullsFirst, NullsLast, OrderingPolicy, Reversed,
    ThenBy,
};
pub use sequence::Sequence;
pub use verify::{verify_array, verify_chain, InvariantError, SortedBy};
