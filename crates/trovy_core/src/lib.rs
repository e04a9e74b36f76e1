//! Core domain logic for Trovy list management.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod mutate;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{share_url, ItemId, List, ListId, ListItem, ListProgress};
pub use mutate::{Clock, IdGenerator, ListValidationError, SystemClock, UuidGenerator};
pub use service::list_service::{ListService, ServiceError, ServiceResult};
pub use store::{ListStore, SqliteSlotStore, StoreError, StoreResult, LISTS_SLOT_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
