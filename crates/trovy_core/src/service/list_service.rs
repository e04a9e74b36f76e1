//! List use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for list and item commands.
//! - Own the read -> mutate -> replace -> persist cycle so callers never
//!   hold hidden shared state.
//!
//! # Invariants
//! - Every successful mutation persists the full collection before
//!   returning.
//! - Service APIs never bypass mutator validation.

use crate::model::list::{ItemId, List, ListId};
use crate::mutate::{self, Clock, IdGenerator, ListValidationError, SystemClock, UuidGenerator};
use crate::store::{ListStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for list use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Command input was rejected at the mutation boundary.
    Validation(ListValidationError),
    /// Target list does not exist in the persisted collection.
    ListNotFound(ListId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ListNotFound(id) => write!(f, "list not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::ListNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ListValidationError> for ServiceError {
    fn from(value: ListValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service wrapper over a list store.
pub struct ListService<S: ListStore, G: IdGenerator = UuidGenerator, C: Clock = SystemClock> {
    store: S,
    ids: G,
    clock: C,
}

impl<S: ListStore> ListService<S> {
    /// Creates a service with the default random IDs and system clock.
    pub fn new(store: S) -> Self {
        Self::with_parts(store, UuidGenerator, SystemClock)
    }
}

impl<S: ListStore, G: IdGenerator, C: Clock> ListService<S, G, C> {
    /// Creates a service with caller-provided ID and clock sources.
    ///
    /// Used by tests that need deterministic IDs and timestamps.
    pub fn with_parts(store: S, ids: G, clock: C) -> Self {
        Self { store, ids, clock }
    }

    /// Creates a list and appends it to the persisted collection.
    pub fn create_list(
        &self,
        title: &str,
        description: &str,
        is_public: bool,
    ) -> ServiceResult<List> {
        let list = mutate::create_list(&self.ids, &self.clock, title, description, is_public)?;

        let mut lists = self.store.load()?;
        lists.push(list.clone());
        self.store.save_all(&lists)?;

        info!(
            "event=list_create module=service status=ok list_id={} public={}",
            list.id, list.is_public
        );
        Ok(list)
    }

    /// Appends an item to the target list and persists the result.
    pub fn add_item(&self, list_id: ListId, text: &str) -> ServiceResult<List> {
        self.apply(list_id, |list| mutate::add_item(&self.ids, list, text))
    }

    /// Flips an item's check-off state and persists the result.
    pub fn toggle_item(&self, list_id: ListId, item_id: ItemId) -> ServiceResult<List> {
        self.apply(list_id, |list| Ok(mutate::toggle_item(list, item_id)))
    }

    /// Replaces an item's text and persists the result.
    pub fn edit_item_text(
        &self,
        list_id: ListId,
        item_id: ItemId,
        new_text: &str,
    ) -> ServiceResult<List> {
        self.apply(list_id, |list| {
            Ok(mutate::edit_item_text(list, item_id, new_text))
        })
    }

    /// Removes an item and persists the result.
    pub fn delete_item(&self, list_id: ListId, item_id: ItemId) -> ServiceResult<List> {
        self.apply(list_id, |list| Ok(mutate::delete_item(list, item_id)))
    }

    /// Removes the target list from the persisted collection.
    ///
    /// Idempotent: a missing ID is accepted and the unchanged collection is
    /// persisted.
    pub fn delete_list(&self, list_id: ListId) -> ServiceResult<()> {
        let lists = self.store.load()?;
        let next = mutate::delete_list(&lists, list_id);
        self.store.save_all(&next)?;

        info!("event=list_delete module=service status=ok list_id={list_id}");
        Ok(())
    }

    /// Returns one list by ID, if present.
    pub fn get_list(&self, list_id: ListId) -> ServiceResult<Option<List>> {
        let lists = self.store.load()?;
        Ok(lists.into_iter().find(|list| list.id == list_id))
    }

    /// Returns all lists, newest first.
    ///
    /// Ties on `created_at` are broken by ID for deterministic ordering.
    pub fn list_all(&self) -> ServiceResult<Vec<List>> {
        let mut lists = self.store.load()?;
        lists.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(lists)
    }

    fn apply<F>(&self, list_id: ListId, op: F) -> ServiceResult<List>
    where
        F: FnOnce(&List) -> Result<List, ListValidationError>,
    {
        let lists = self.store.load()?;
        let Some(current) = lists.iter().find(|list| list.id == list_id) else {
            return Err(ServiceError::ListNotFound(list_id));
        };

        let updated = op(current)?;
        let next = mutate::replace_list(&lists, &updated);
        self.store.save_all(&next)?;
        Ok(updated)
    }
}
