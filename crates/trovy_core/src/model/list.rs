//! List and list-item records.
//!
//! # Responsibility
//! - Define the persisted shape of a list collection (camelCase wire names,
//!   ISO-8601 `createdAt`).
//! - Provide derived views: completion progress and the public share path.
//!
//! # Invariants
//! - `id` and `created_at` are immutable after construction.
//! - `items` keeps insertion order; it is the display order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a list.
pub type ListId = Uuid;

/// Stable identifier of an item within a list.
pub type ItemId = Uuid;

/// A single checkable entry within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: ItemId,
    /// Free-text label. Mutable through `edit_item_text`.
    pub text: String,
    /// Check-off state. New items start unchecked.
    pub completed: bool,
}

impl ListItem {
    /// Creates an unchecked item with a caller-provided stable ID.
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// A named, ordered collection of items owned by one user session.
///
/// Serialized field names follow the persisted document exactly:
/// `isPublic` and `createdAt` stay camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    /// Non-empty after trimming at creation time.
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    /// Governs whether a share link is meaningful. No access control is
    /// enforced beyond this flag.
    pub is_public: bool,
    pub items: Vec<ListItem>,
    /// Creation timestamp, never updated afterwards.
    pub created_at: DateTime<Utc>,
}

impl List {
    /// Returns the item with the given ID, if present.
    pub fn item(&self, item_id: ItemId) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Returns completion progress over the current items.
    pub fn progress(&self) -> ListProgress {
        ListProgress {
            completed: self.items.iter().filter(|item| item.completed).count(),
            total: self.items.len(),
        }
    }

    /// Returns the share path (`/list/<id>`) for public lists.
    ///
    /// Private lists have no meaningful share target and yield `None`.
    pub fn share_path(&self) -> Option<String> {
        if self.is_public {
            Some(format!("/list/{}", self.id))
        } else {
            None
        }
    }
}

/// Completion summary for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProgress {
    pub completed: usize,
    pub total: usize,
}

impl ListProgress {
    /// Completion percentage in `[0.0, 100.0]`; `0.0` for an empty list.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.completed as f64 / self.total as f64) * 100.0
        }
    }
}

/// Joins a list's share path onto a base URL.
///
/// Returns `None` for private lists. A trailing slash on `base` is tolerated.
pub fn share_url(base: &str, list: &List) -> Option<String> {
    list.share_path()
        .map(|path| format!("{}{path}", base.trim_end_matches('/')))
}
