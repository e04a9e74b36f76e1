//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the read/mutate/replace/persist cycle over a `ListStore`.
//! - Keep UI layers decoupled from storage and mutation details.

pub mod list_service;
