//! Pure list mutation operations.
//!
//! # Responsibility
//! - Transform list values without touching shared state or storage.
//! - Keep identifier generation and timestamping injectable for determinism.
//!
//! # Invariants
//! - Inputs are never modified; every operation returns a new value.
//! - Item ordering survives every operation except targeted deletion.
//! - Operations targeting an absent ID return the input unchanged (no-op).

use crate::model::list::{ItemId, List, ListId, ListItem};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Source of fresh stable identifiers.
///
/// Kept as a trait so mutators stay deterministic under test.
pub trait IdGenerator {
    fn next_id(&self) -> Uuid;
}

/// Default generator backed by random UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Default clock reading system time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Validation rejection raised at the mutation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListValidationError {
    /// List title is empty after trimming.
    EmptyTitle,
    /// Item text is empty after trimming.
    EmptyItemText,
}

impl Display for ListValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "list title must not be empty"),
            Self::EmptyItemText => write!(f, "item text must not be empty"),
        }
    }
}

impl Error for ListValidationError {}

/// Creates a new list with a generated ID and the clock's current time.
///
/// # Contract
/// - Rejects titles that are empty after trimming.
/// - Stores `title` and `description` as given (no trimming applied).
/// - `items` starts empty.
pub fn create_list(
    ids: &impl IdGenerator,
    clock: &impl Clock,
    title: &str,
    description: &str,
    is_public: bool,
) -> Result<List, ListValidationError> {
    if title.trim().is_empty() {
        return Err(ListValidationError::EmptyTitle);
    }

    Ok(List {
        id: ids.next_id(),
        title: title.to_string(),
        description: description.to_string(),
        is_public,
        items: Vec::new(),
        created_at: clock.now(),
    })
}

/// Appends a new unchecked item with the trimmed text.
///
/// # Contract
/// - Rejects text that is empty after trimming.
/// - The stored item text is the trimmed input.
pub fn add_item(
    ids: &impl IdGenerator,
    list: &List,
    text: &str,
) -> Result<List, ListValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ListValidationError::EmptyItemText);
    }

    let mut updated = list.clone();
    updated.items.push(ListItem::new(ids.next_id(), trimmed));
    Ok(updated)
}

/// Flips `completed` on the matching item. No-op when the ID is absent.
pub fn toggle_item(list: &List, item_id: ItemId) -> List {
    let mut updated = list.clone();
    if let Some(item) = updated.items.iter_mut().find(|item| item.id == item_id) {
        item.completed = !item.completed;
    }
    updated
}

/// Replaces the text of the matching item. No-op when the ID is absent.
///
/// Empty replacement text is allowed here; only item creation validates
/// non-emptiness.
pub fn edit_item_text(list: &List, item_id: ItemId, new_text: &str) -> List {
    let mut updated = list.clone();
    if let Some(item) = updated.items.iter_mut().find(|item| item.id == item_id) {
        item.text = new_text.to_string();
    }
    updated
}

/// Removes the matching item. No-op when the ID is absent.
pub fn delete_item(list: &List, item_id: ItemId) -> List {
    let mut updated = list.clone();
    updated.items.retain(|item| item.id != item_id);
    updated
}

/// Removes the matching list from a collection. No-op when the ID is absent.
pub fn delete_list(lists: &[List], list_id: ListId) -> Vec<List> {
    lists
        .iter()
        .filter(|list| list.id != list_id)
        .cloned()
        .collect()
}

/// Replaces the element whose ID matches `updated.id`.
///
/// Returns the input unchanged when no element matches.
pub fn replace_list(lists: &[List], updated: &List) -> Vec<List> {
    lists
        .iter()
        .map(|list| {
            if list.id == updated.id {
                updated.clone()
            } else {
                list.clone()
            }
        })
        .collect()
}
