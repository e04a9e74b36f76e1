//! Store contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save-all contract over the persisted list collection.
//! - Isolate SQLite and JSON details from mutation and service code.
//!
//! # Invariants
//! - `save_all` fully overwrites the slot; there is no partial merge.
//! - `load` degrades absent or malformed persisted data to an empty
//!   collection instead of failing.

use crate::db::DbError;
use crate::model::list::List;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod slot_store;

pub use slot_store::{SqliteSlotStore, LISTS_SLOT_KEY};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level store failure.
///
/// Malformed persisted content is not represented here; `load` swallows it
/// by contract and returns an empty collection.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize list collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence interface for the whole list collection.
pub trait ListStore {
    /// Loads the persisted collection; empty when absent or unreadable.
    fn load(&self) -> StoreResult<Vec<List>>;
    /// Replaces the persisted collection with `lists`.
    fn save_all(&self, lists: &[List]) -> StoreResult<()>;
}
