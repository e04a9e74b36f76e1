//! Domain model for user-owned checkable lists.
//!
//! # Responsibility
//! - Define the canonical `List` and `ListItem` records and their wire shape.
//! - Provide read-only projections (progress, share path) used by callers.
//!
//! # Invariants
//! - Every list and item carries a stable `Uuid` identity.
//! - `List::items` ordering is display ordering; mutations never reorder.

pub mod list;
