// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cursor traversal and removal.
//!
//! Several cursors walk the same list while it is also mutated directly. A
//! cursor must either do what a `Vec` model predicts or refuse with
//! `InvalidCursorState`; the chain must stay well formed either way.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ordseq::{verify_chain, Cursor, CursorState, LinkedSequence, Sequence, SequenceError};

#[derive(Debug, Arbitrary)]
enum Step {
    Open(u8),
    Next(u8),
    Previous(u8),
    Remove(u8),
    Insert(u8, i8),
    Set(u8, i8),
    PushBack(i8),
    PopFront,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial: Vec<i8>,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    let mut list = LinkedSequence::from(input.initial);
    let mut cursors: Vec<Cursor> = Vec::new();

    for step in input.steps {
        let result = match step {
            Step::Open(at) => {
                let at = usize::from(at) % (list.len() + 1);
                let cursor = list.open_cursor_at(at).expect("position in range");
                assert_eq!(cursor.next_index(), at);
                assert_eq!(cursor.state(), CursorState::Fresh);
                cursors.push(cursor);
                Ok(())
            }
            Step::Next(which) => match pick(&mut cursors, which) {
                Some(cursor) => {
                    let at = cursor.next_index();
                    cursor.next(&list).map(|value| {
                        if let Some(value) = value {
                            assert_eq!(list.get(at), Ok(value));
                        }
                    })
                }
                None => Ok(()),
            },
            Step::Previous(which) => match pick(&mut cursors, which) {
                Some(cursor) => cursor.previous(&list).map(|value| {
                    if let Some(value) = value {
                        assert_eq!(list.get(cursor.next_index()), Ok(value));
                    }
                }),
                None => Ok(()),
            },
            Step::Remove(which) => match pick(&mut cursors, which) {
                Some(cursor) => {
                    let before = list.len();
                    cursor
                        .remove_current(&mut list)
                        .map(|_| assert_eq!(list.len(), before - 1))
                }
                None => Ok(()),
            },
            Step::Insert(which, v) => match pick(&mut cursors, which) {
                Some(cursor) => cursor.insert(&mut list, v).map(|()| {
                    assert_eq!(list.get(cursor.next_index() - 1), Ok(&v));
                }),
                None => Ok(()),
            },
            Step::Set(which, v) => match pick(&mut cursors, which) {
                Some(cursor) => cursor.set_current(&mut list, v).map(|_| ()),
                None => Ok(()),
            },
            Step::PushBack(v) => {
                list.push_back(v);
                Ok(())
            }
            Step::PopFront => list.pop_front().map(|_| ()),
        };

        match result {
            Ok(()) | Err(SequenceError::InvalidCursorState(_)) | Err(SequenceError::EmptySequence) => {}
            Err(err) => panic!("unexpected error from cursor walk: {}", err),
        }
        assert!(verify_chain(&list).is_ok());
    }
});

fn pick(cursors: &mut [Cursor], which: u8) -> Option<&mut Cursor> {
    if cursors.is_empty() {
        return None;
    }
    let index = usize::from(which) % cursors.len();
    cursors.get_mut(index)
}
