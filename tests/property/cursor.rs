//! Cursor model checking: a random walk of cursor operations against a `Vec` plus
//! an index, with external mutations mixed in.

use super::common::assert_linked;
use ordseq::{CursorFault, CursorState, LinkedSequence, Sequence, SequenceError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Next,
    Previous,
    Remove,
    Insert(i8),
    Set(i8),
    /// Structural change made directly on the list.
    External(i8),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        5 => Just(Step::Next),
        3 => Just(Step::Previous),
        3 => Just(Step::Remove),
        1 => any::<i8>().prop_map(Step::Insert),
        1 => any::<i8>().prop_map(Step::Set),
        1 => any::<i8>().prop_map(Step::External),
    ]
}

/// Reference cursor: a position in a `Vec` and the index last returned.
struct Model {
    items: Vec<i8>,
    index: usize,
    last: Option<usize>,
    stale: bool,
    invalid: bool,
}

fn fault(fault: CursorFault) -> SequenceError {
    SequenceError::InvalidCursorState(fault)
}

impl Model {
    /// The error every cursor call returns once the model is stale, if any.
    fn gate(&mut self) -> Option<SequenceError> {
        if self.invalid {
            return Some(fault(CursorFault::Invalidated));
        }
        if self.stale {
            self.invalid = true;
            self.last = None;
            return Some(fault(CursorFault::ConcurrentModification));
        }
        None
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_cursor_matches_model(
        initial in prop::collection::vec(any::<i8>(), 0..20),
        start in any::<usize>(),
        steps in prop::collection::vec(step_strategy(), 0..60),
    ) {
        let mut list = LinkedSequence::from(initial.clone());
        let start = start % (initial.len() + 1);
        let mut cursor = list.open_cursor_at(start).unwrap();
        let mut model = Model { items: initial, index: start, last: None, stale: false, invalid: false };

        for step in steps {
            match step {
                Step::External(v) => {
                    list.push_back(v);
                    model.items.push(v);
                    model.stale = true;
                    continue;
                }
                Step::Next => {
                    let actual = cursor.next(&list).map(|v| v.copied());
                    let expected = model.gate().map_or_else(|| {
                        let value = model.items.get(model.index).copied();
                        if value.is_some() {
                            model.last = Some(model.index);
                            model.index += 1;
                        }
                        Ok(value)
                    }, Err);
                    prop_assert_eq!(actual, expected);
                }
                Step::Previous => {
                    let actual = cursor.previous(&list).map(|v| v.copied());
                    let expected = model.gate().map_or_else(|| {
                        if model.index == 0 {
                            return Ok(None);
                        }
                        model.index -= 1;
                        model.last = Some(model.index);
                        Ok(Some(model.items[model.index]))
                    }, Err);
                    prop_assert_eq!(actual, expected);
                }
                Step::Remove => {
                    let actual = cursor.remove_current(&mut list);
                    let expected = model.gate().map_or_else(|| match model.last.take() {
                        None => Err(fault(CursorFault::NothingToRemove)),
                        Some(at) => {
                            if at < model.index {
                                model.index -= 1;
                            }
                            Ok(model.items.remove(at))
                        }
                    }, Err);
                    prop_assert_eq!(actual, expected);
                }
                Step::Insert(v) => {
                    let actual = cursor.insert(&mut list, v);
                    let expected = model.gate().map_or_else(|| {
                        model.items.insert(model.index, v);
                        model.index += 1;
                        model.last = None;
                        Ok(())
                    }, Err);
                    prop_assert_eq!(actual, expected);
                }
                Step::Set(v) => {
                    let actual = cursor.set_current(&mut list, v);
                    let expected = model.gate().map_or_else(|| match model.last {
                        None => Err(fault(CursorFault::NothingToRemove)),
                        Some(at) => Ok(std::mem::replace(&mut model.items[at], v)),
                    }, Err);
                    prop_assert_eq!(actual, expected);
                }
            }

            if model.invalid {
                prop_assert_eq!(cursor.state(), CursorState::Invalid);
            } else {
                prop_assert_eq!(cursor.next_index(), model.index);
            }
        }
        assert_linked(&list, &model.items);
    }
}
