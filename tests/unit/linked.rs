//! LinkedSequence: head/tail operations, bulk removal, cursors.

use super::common::{assert_linked, ANIMALS};
use ordseq::{
    case_insensitive, CursorFault, CursorState, LinkedSequence, Sequence, SequenceError,
};

#[test]
fn deque_operations_at_both_ends() {
    let mut list = LinkedSequence::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    assert_linked(&list, &[1, 2, 3]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_back(), Ok(3));
    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop_front(), Ok(2));
    assert_eq!(list.pop_front(), Err(SequenceError::EmptySequence));
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
}

#[test]
fn indexed_operations_from_either_end() {
    let mut list: LinkedSequence<usize> = (0..10).collect();
    list.insert_at(8, 100).unwrap();
    list.insert_at(1, 200).unwrap();
    assert_eq!(list.get(2), Ok(&1));
    assert_eq!(list.get(9), Ok(&100));
    assert_eq!(list.set(10, 80), Ok(8));
    assert_eq!(list.remove_at(9), Ok(100));
    assert_eq!(list.remove_at(1), Ok(200));
    assert_linked(&list, &[0, 1, 2, 3, 4, 5, 6, 7, 80, 9]);
}

#[test]
fn out_of_range_leaves_list_unchanged() {
    let mut list: LinkedSequence<i32> = (1..=3).collect();
    let mut cursor = list.open_cursor();
    assert_eq!(
        list.remove_at(3),
        Err(SequenceError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        list.insert_at(5, 0),
        Err(SequenceError::IndexOutOfRange { index: 5, len: 3 })
    );
    assert!(list.open_cursor_at(4).is_err());
    assert_linked(&list, &[1, 2, 3]);
    // Failed calls are not modifications.
    assert_eq!(cursor.next(&list), Ok(Some(&1)));
}

#[test]
fn remove_all_in_accepts_any_collection() {
    let mut animals = LinkedSequence::from(&ANIMALS[..]);
    assert!(animals.remove_all_in(&["Cow", "Cat"]));
    assert_linked(&animals, &["Dog", "Goat"]);
    assert!(!animals.remove_all_in(&Vec::<&str>::new()));
    assert!(!animals.remove_all_in(&["Lion"]));
}

#[test]
fn remove_all_matching_and_append() {
    let mut animals = LinkedSequence::from(&ANIMALS[..]);
    animals.append_all(["Lion", "Tiger"]);
    assert_eq!(animals.remove_all_matching(|a| a.starts_with('C')), 2);
    assert_linked(&animals, &["Dog", "Goat", "Lion", "Tiger"]);
    animals.clear();
    assert_linked(&animals, &[]);
    animals.push_back("Elephant");
    assert_linked(&animals, &["Elephant"]);
}

#[test]
fn cursor_opened_mid_list() {
    let mut list: LinkedSequence<char> = "abcde".chars().collect();
    let mut cursor = list.open_cursor_at(2).unwrap();
    assert_eq!(cursor.next_index(), 2);
    assert_eq!(cursor.previous_index(), Some(1));
    assert_eq!(cursor.next(&list), Ok(Some(&'c')));
    assert_eq!(cursor.remove_current(&mut list), Ok('c'));
    assert_eq!(cursor.next(&list), Ok(Some(&'d')));
    cursor.insert(&mut list, 'x').unwrap();
    assert_eq!(cursor.previous(&list), Ok(Some(&'x')));
    assert_eq!(cursor.state(), CursorState::AfterPrevious);
    assert_linked(&list, &['a', 'b', 'd', 'x', 'e']);
}

#[test]
fn sort_invalidates_cursors() {
    let mut list = LinkedSequence::from(vec!["b", "A", "c"]);
    let mut cursor = list.open_cursor();
    list.sort_with(&case_insensitive());
    assert_linked(&list, &["A", "b", "c"]);
    assert_eq!(
        cursor.next(&list),
        Err(SequenceError::InvalidCursorState(
            CursorFault::ConcurrentModification
        ))
    );
}

#[test]
fn set_is_not_structural() {
    let mut list: LinkedSequence<i32> = (1..=3).collect();
    let mut cursor = list.open_cursor();
    list.set(0, 10).unwrap();
    *list.get_mut(2).unwrap() = 30;
    assert_eq!(cursor.next(&list), Ok(Some(&10)));
    assert_linked(&list, &[10, 2, 30]);
}

#[test]
fn display_and_serde() {
    let list: LinkedSequence<i32> = vec![1, 2, 3].into();
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");
    let back: LinkedSequence<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
    assert_ne!(back.id(), list.id());
}
