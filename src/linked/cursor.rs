// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bidirectional cursor with O(1) removal at the current position.
//!
//! A cursor does not borrow its list. Every operation takes the list explicitly and
//! first checks that (a) it is the list the cursor was opened on and (b) nothing
//! else has structurally modified it since the cursor last looked. Either failure
//! is reported as `InvalidCursorState`; a modification detected this way is
//! permanent and the cursor stays `Invalid`.
//!
//! | From                         | Call                         | To              |
//! |------------------------------|------------------------------|-----------------|
//! | any valid state              | `next`                       | `AfterNext`     |
//! | any valid state              | `previous`                   | `AfterPrevious` |
//! | `AfterNext`/`AfterPrevious`  | `remove_current`             | `Fresh`         |
//! | any valid state              | `insert`                     | `Fresh`         |
//! | any                          | list modified elsewhere      | `Invalid`       |
//!
//! `next`/`previous` at either end return `Ok(None)` and leave the state alone.

use crate::error::{CursorFault, Result};

use super::{LinkedSequence, ListId, NodeId};

/// Where the cursor is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Nothing returned since opening, removing or inserting.
    Fresh,
    AfterNext,
    AfterPrevious,
    /// The list changed behind the cursor; every further call fails.
    Invalid,
}

/// Position between two elements of a [`LinkedSequence`].
///
/// `next_index` elements lie before the cursor. `next` returns the element after
/// it, `previous` the element before it.
#[derive(Debug, Clone)]
pub struct Cursor {
    list: ListId,
    expected_modifications: u64,
    next: Option<NodeId>,
    index: usize,
    last_returned: Option<NodeId>,
    state: CursorState,
}

impl Cursor {
    pub(super) fn new(
        list: ListId,
        expected_modifications: u64,
        next: Option<NodeId>,
        index: usize,
    ) -> Self {
        Self {
            list,
            expected_modifications,
            next,
            index,
            last_returned: None,
            state: CursorState::Fresh,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Index of the element `next` would return.
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Index of the element `previous` would return, `None` at the front.
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    pub fn has_next<T>(&mut self, list: &LinkedSequence<T>) -> Result<bool> {
        self.check(list)?;
        Ok(self.next.is_some())
    }

    pub fn has_previous<T>(&mut self, list: &LinkedSequence<T>) -> Result<bool> {
        self.check(list)?;
        Ok(self.index > 0)
    }

    /// Step forward and return the element passed over, `None` at the end.
    pub fn next<'a, T>(&mut self, list: &'a LinkedSequence<T>) -> Result<Option<&'a T>> {
        self.check(list)?;
        let Some(id) = self.next else {
            return Ok(None);
        };
        self.next = list.links(id).and_then(|(_, next)| next);
        self.index += 1;
        self.last_returned = Some(id);
        self.state = CursorState::AfterNext;
        Ok(Some(list.value(id)))
    }

    /// Step backward and return the element passed over, `None` at the front.
    pub fn previous<'a, T>(&mut self, list: &'a LinkedSequence<T>) -> Result<Option<&'a T>> {
        self.check(list)?;
        let previous = match self.next {
            Some(next) => list.links(next).and_then(|(prev, _)| prev),
            None => list.tail_id(),
        };
        let Some(id) = previous else {
            return Ok(None);
        };
        self.next = Some(id);
        self.index -= 1;
        self.last_returned = Some(id);
        self.state = CursorState::AfterPrevious;
        Ok(Some(list.value(id)))
    }

    /// Remove the element last returned by `next`/`previous` in O(1).
    ///
    /// Fails with `InvalidCursorState` when nothing was returned since the last move,
    /// removal or insertion.
    pub fn remove_current<T>(&mut self, list: &mut LinkedSequence<T>) -> Result<T> {
        self.check(list)?;
        let id = self.current()?;
        match self.state {
            CursorState::AfterNext => self.index -= 1,
            CursorState::AfterPrevious => {
                self.next = list.links(id).and_then(|(_, next)| next);
            }
            CursorState::Fresh | CursorState::Invalid => {
                return Err(CursorFault::NothingToRemove.into());
            }
        }
        let value = list.unlink(id);
        self.resync(list);
        Ok(value)
    }

    /// Replace the element last returned by `next`/`previous`, returning the old value.
    ///
    /// Not a structural change: the cursor keeps its state and other cursors stay valid.
    pub fn set_current<T>(&mut self, list: &mut LinkedSequence<T>, value: T) -> Result<T> {
        self.check(list)?;
        let id = self.current()?;
        Ok(std::mem::replace(list.value_mut(id), value))
    }

    /// Insert `value` immediately before the cursor.
    ///
    /// A following `next` is unaffected; a following `previous` returns `value`.
    pub fn insert<T>(&mut self, list: &mut LinkedSequence<T>, value: T) -> Result<()> {
        self.check(list)?;
        list.link_before(self.next, value);
        self.index += 1;
        self.resync(list);
        Ok(())
    }

    fn current(&self) -> Result<NodeId> {
        self.last_returned
            .ok_or_else(|| CursorFault::NothingToRemove.into())
    }

    fn resync<T>(&mut self, list: &LinkedSequence<T>) {
        self.expected_modifications = list.modifications();
        self.last_returned = None;
        self.state = CursorState::Fresh;
    }

    fn check<T>(&mut self, list: &LinkedSequence<T>) -> Result<()> {
        if self.state == CursorState::Invalid {
            return Err(CursorFault::Invalidated.into());
        }
        if self.list != list.id() {
            return Err(CursorFault::ForeignList.into());
        }
        if self.expected_modifications != list.modifications() {
            self.state = CursorState::Invalid;
            self.last_returned = None;
            return Err(CursorFault::ConcurrentModification.into());
        }
        Ok(())
    }
}
