//! Ordering policies and their combinators.

use super::common::{make_records, tied_records, Record};
use ordseq::{
    case_insensitive, comparing, comparing_with, natural, nulls_first, nulls_last,
    reverse_order, Compose, DynamicArraySequence, OrderingPolicy, Sequence,
};
use std::cmp::Ordering;

#[test]
fn closures_are_policies() {
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
    assert!(by_len.is_sorted(&["a", "bb", "cc", "ddd"][..]));
    assert!(!by_len.is_sorted(&["bb", "a"][..]));
}

#[test]
fn then_by_only_consults_second_on_ties() {
    let policy = Record::by_age().then_by(Record::by_name());
    let a = Record::new(24, "A");
    let b = Record::new(24, "B");
    let c = Record::new(20, "Z");
    assert_eq!(policy.compare(&a, &b), Ordering::Less);
    assert_eq!(policy.compare(&c, &a), Ordering::Less);
    assert_eq!(policy.compare(&a, &a.clone()), Ordering::Equal);
}

#[test]
fn reversed_then_by_reverses_only_the_primary_key() {
    let mut records: DynamicArraySequence<Record> = tied_records().into();
    records.sort_with(&Record::by_age().reversed().then_by(Record::by_name()));
    assert_eq!(
        records.to_vec(),
        make_records(&[(32, "C"), (24, "A"), (24, "B")])
    );
}

#[test]
fn reversing_a_composite_reverses_every_key() {
    let mut records: DynamicArraySequence<Record> = tied_records().into();
    records.sort_with(&Record::by_age().then_by(Record::by_name()).reversed());
    assert_eq!(
        records.to_vec(),
        make_records(&[(32, "C"), (24, "B"), (24, "A")])
    );
}

#[test]
fn nulls_first_and_last() {
    let first = nulls_first(natural());
    let last = nulls_last(natural());
    assert_eq!(first.compare(&None, &Some(i32::MIN)), Ordering::Less);
    assert_eq!(last.compare(&None, &Some(i32::MAX)), Ordering::Greater);
    assert_eq!(first.compare(&None::<i32>, &None), Ordering::Equal);
    assert_eq!(last.compare(&Some(1), &Some(2)), Ordering::Less);

    let mut values: DynamicArraySequence<Option<i32>> =
        vec![Some(5), None, Some(2), None, Some(1)].into();
    values.sort_with(&nulls_last(reverse_order()));
    assert_eq!(values.to_vec(), vec![Some(5), Some(2), Some(1), None, None]);
}

#[test]
fn comparing_with_orders_keys_by_inner_policy() {
    let by_name_ci = comparing_with(|r: &Record| r.name.clone(), case_insensitive());
    let mut records: DynamicArraySequence<Record> =
        make_records(&[(1, "bob"), (2, "Alice"), (3, "carol")]).into();
    records.sort_with(&by_name_ci);
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "bob", "carol"]);
}

#[test]
fn case_insensitive_ignores_case_only() {
    let policy = case_insensitive();
    assert_eq!(policy.compare("ABC", "abc"), Ordering::Equal);
    assert_eq!(policy.compare("abc", "ABD"), Ordering::Less);
    assert_eq!(policy.compare(&String::from("b"), &String::from("A")), Ordering::Greater);
}

#[test]
fn comparing_natural_key() {
    let by_len = comparing(|s: &String| s.len());
    assert_eq!(
        by_len.compare(&"xyz".to_string(), &"ab".to_string()),
        Ordering::Greater
    );
}
