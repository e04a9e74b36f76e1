use chrono::{DateTime, TimeZone, Utc};
use std::cell::Cell;
use std::collections::HashSet;
use trovy_core::mutate::{
    add_item, create_list, delete_item, delete_list, edit_item_text, replace_list, toggle_item,
};
use trovy_core::{Clock, IdGenerator, List, ListValidationError};
use uuid::Uuid;

/// Deterministic ID source handing out sequential UUIDs.
struct SeqIds(Cell<u128>);

impl SeqIds {
    fn new() -> Self {
        Self(Cell::new(1))
    }
}

impl IdGenerator for SeqIds {
    fn next_id(&self) -> Uuid {
        let next = self.0.get();
        self.0.set(next + 1);
        Uuid::from_u128(next)
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
}

#[test]
fn create_list_sets_title_and_starts_empty() {
    let ids = SeqIds::new();
    let clock = fixed_clock();

    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();
    assert_eq!(list.title, "Groceries");
    assert_eq!(list.description, "");
    assert!(!list.is_public);
    assert!(list.items.is_empty());
    assert_eq!(list.created_at, clock.0);
}

#[test]
fn create_list_generates_distinct_ids() {
    let ids = SeqIds::new();
    let clock = fixed_clock();

    let mut seen = HashSet::new();
    for n in 0..10 {
        let list = create_list(&ids, &clock, &format!("list {n}"), "", false).unwrap();
        assert!(seen.insert(list.id), "duplicate list id generated");
    }
}

#[test]
fn create_list_rejects_whitespace_only_title() {
    let ids = SeqIds::new();
    let clock = fixed_clock();

    let err = create_list(&ids, &clock, "   ", "desc", true).unwrap_err();
    assert_eq!(err, ListValidationError::EmptyTitle);
}

#[test]
fn create_list_keeps_title_as_typed() {
    let ids = SeqIds::new();
    let clock = fixed_clock();

    // Validation trims, storage does not.
    let list = create_list(&ids, &clock, "  Groceries  ", "", false).unwrap();
    assert_eq!(list.title, "  Groceries  ");
}

#[test]
fn add_item_appends_trimmed_unchecked_item() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();

    let updated = add_item(&ids, &list, "  Milk  ").unwrap();
    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].text, "Milk");
    assert!(!updated.items[0].completed);

    // Input list is untouched.
    assert!(list.items.is_empty());
}

#[test]
fn add_item_rejects_empty_text() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();

    let err = add_item(&ids, &list, " \t ").unwrap_err();
    assert_eq!(err, ListValidationError::EmptyItemText);
}

#[test]
fn add_then_delete_round_trips_to_pre_add_state() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();
    let before = add_item(&ids, &list, "Milk").unwrap();

    let with_eggs = add_item(&ids, &before, "Eggs").unwrap();
    let eggs_id = with_eggs.items.last().unwrap().id;
    let after = delete_item(&with_eggs, eggs_id);

    assert_eq!(after.items, before.items);
}

#[test]
fn toggle_twice_restores_original_state() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();
    let list = add_item(&ids, &list, "Milk").unwrap();
    let item_id = list.items[0].id;

    let once = toggle_item(&list, item_id);
    assert!(once.items[0].completed);

    let twice = toggle_item(&once, item_id);
    assert_eq!(twice.items, list.items);
}

#[test]
fn operations_on_absent_item_id_are_no_ops() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();
    let list = add_item(&ids, &list, "Milk").unwrap();
    let stranger = Uuid::from_u128(0xdead_beef);

    assert_eq!(toggle_item(&list, stranger).items, list.items);
    assert_eq!(edit_item_text(&list, stranger, "Cream").items, list.items);
    assert_eq!(delete_item(&list, stranger).items, list.items);
}

#[test]
fn edit_item_text_replaces_text_and_allows_empty() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();
    let list = add_item(&ids, &list, "Milk").unwrap();
    let item_id = list.items[0].id;

    let renamed = edit_item_text(&list, item_id, "Oat milk");
    assert_eq!(renamed.items[0].text, "Oat milk");

    // Item creation validates non-emptiness; editing does not.
    let blanked = edit_item_text(&renamed, item_id, "");
    assert_eq!(blanked.items[0].text, "");
}

#[test]
fn item_ordering_survives_mutations_except_targeted_delete() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let mut list = create_list(&ids, &clock, "Groceries", "", false).unwrap();
    for text in ["a", "b", "c", "d"] {
        list = add_item(&ids, &list, text).unwrap();
    }
    let texts =
        |l: &List| l.items.iter().map(|i| i.text.clone()).collect::<Vec<_>>();

    let toggled = toggle_item(&list, list.items[1].id);
    assert_eq!(texts(&toggled), vec!["a", "b", "c", "d"]);

    let edited = edit_item_text(&list, list.items[2].id, "cc");
    assert_eq!(texts(&edited), vec!["a", "b", "cc", "d"]);

    let removed = delete_item(&list, list.items[1].id);
    assert_eq!(texts(&removed), vec!["a", "c", "d"]);
}

#[test]
fn groceries_milk_worked_example() {
    let ids = SeqIds::new();
    let clock = fixed_clock();

    let list = create_list(&ids, &clock, "Groceries", "", false).unwrap();
    assert_eq!(list.title, "Groceries");
    assert!(list.items.is_empty());
    assert!(!list.is_public);

    let list = add_item(&ids, &list, "Milk").unwrap();
    assert_eq!(list.items[0].text, "Milk");
    assert!(!list.items[0].completed);

    let list = toggle_item(&list, list.items[0].id);
    assert_eq!(list.items[0].text, "Milk");
    assert!(list.items[0].completed);
}

#[test]
fn delete_list_removes_only_the_target() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list_a = create_list(&ids, &clock, "A", "", false).unwrap();
    let list_b = create_list(&ids, &clock, "B", "", false).unwrap();
    let lists = vec![list_a.clone(), list_b.clone()];

    let remaining = delete_list(&lists, list_a.id);
    assert_eq!(remaining, vec![list_b.clone()]);

    let unchanged = delete_list(&lists, Uuid::from_u128(0xdead_beef));
    assert_eq!(unchanged, lists);
}

#[test]
fn replace_list_swaps_matching_element_only() {
    let ids = SeqIds::new();
    let clock = fixed_clock();
    let list_a = create_list(&ids, &clock, "A", "", false).unwrap();
    let list_b = create_list(&ids, &clock, "B", "", false).unwrap();
    let lists = vec![list_a.clone(), list_b.clone()];

    let updated_a = add_item(&ids, &list_a, "Milk").unwrap();
    let next = replace_list(&lists, &updated_a);
    assert_eq!(next, vec![updated_a, list_b.clone()]);

    let mut unknown: List = list_b.clone();
    unknown.id = Uuid::from_u128(0xdead_beef);
    assert_eq!(replace_list(&lists, &unknown), lists);
}
