//! SQLite-backed slot store for the list collection.
//!
//! # Responsibility
//! - Persist the whole collection as one JSON document under a fixed key.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Exactly one slot row per key; writes replace the full value.
//! - Read paths never surface malformed slot content to callers.

use crate::model::list::List;
use crate::store::{ListStore, StoreResult};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};

/// Fixed key of the slot holding the serialized list collection.
pub const LISTS_SLOT_KEY: &str = "lists";

/// SQLite-backed list store over the `slots` table.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ListStore for SqliteSlotStore<'_> {
    fn load(&self) -> StoreResult<Vec<List>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [LISTS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(lists) => Ok(lists),
            Err(err) => {
                warn!(
                    "event=slot_load module=store status=malformed key={LISTS_SLOT_KEY} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, lists: &[List]) -> StoreResult<()> {
        let payload = serde_json::to_string(lists)?;

        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![LISTS_SLOT_KEY, payload],
        )?;

        debug!(
            "event=slot_save module=store status=ok key={LISTS_SLOT_KEY} lists={}",
            lists.len()
        );
        Ok(())
    }
}
