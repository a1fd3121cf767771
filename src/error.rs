// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by sequence operations.
//!
//! Every failure is local and synchronous: the call that triggered it returns
//! `Err` and the container is left exactly as it was before the call.
//!
//! | Variant              | Raised by                                          |
//! |----------------------|----------------------------------------------------|
//! | `IndexOutOfRange`    | `get`, `set`, `insert_at`, `remove_at`             |
//! | `EmptySequence`      | `pop_front`, `pop_back`                            |
//! | `InvalidCursorState` | every `Cursor` operation, see [`CursorFault`]      |

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;

/// Why a cursor refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorFault {
    /// `remove_current`/`set_current` without a preceding `next`/`previous`,
    /// or called twice without an intervening move.
    NothingToRemove,
    /// The list was structurally modified through some path other than this cursor.
    ConcurrentModification,
    /// The cursor was opened on a different list.
    ForeignList,
    /// The cursor already failed once and stays unusable.
    Invalidated,
}

impl fmt::Display for CursorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorFault::NothingToRemove => {
                write!(f, "no element returned since the last move or removal")
            }
            CursorFault::ConcurrentModification => {
                write!(f, "list was modified outside this cursor")
            }
            CursorFault::ForeignList => write!(f, "cursor belongs to a different list"),
            CursorFault::Invalidated => write!(f, "cursor was invalidated"),
        }
    }
}

/// Error type for sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Index outside the valid bounds for the requested operation.
    IndexOutOfRange { index: usize, len: usize },
    /// Head/tail operation on a zero-length sequence.
    EmptySequence,
    /// Cursor misuse or use of a stale cursor.
    InvalidCursorState(CursorFault),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            SequenceError::EmptySequence => write!(f, "sequence is empty"),
            SequenceError::InvalidCursorState(fault) => {
                write!(f, "invalid cursor state: {}", fault)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

impl From<CursorFault> for SequenceError {
    fn from(fault: CursorFault) -> Self {
        SequenceError::InvalidCursorState(fault)
    }
}

/// Check `index < len`, the bound for reads, writes and removals.
#[inline]
pub(crate) fn check_element_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SequenceError::IndexOutOfRange { index, len })
    }
}

/// Check `index <= len`, the bound for insertions.
#[inline]
pub(crate) fn check_position_index(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(SequenceError::IndexOutOfRange { index, len })
    }
}
