//! Per-user filter settings storage
//!
//! Saved criteria live for the process lifetime only. The store exchanges
//! whole [`FilterCriteria`] values; callers never mutate stored state in
//! place.

use crate::error::{Result, ScreenerError};
use crate::model::FilterCriteria;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage interface for per-user filter settings
pub trait FilterStore: Send + Sync {
    /// Saved criteria for a user, if any
    fn get(&self, user_id: &str) -> Option<FilterCriteria>;

    /// Replace the user's criteria as a whole
    fn replace(&self, user_id: &str, criteria: FilterCriteria) -> Result<()>;

    /// Drop the user's criteria; returns whether anything was stored
    fn reset(&self, user_id: &str) -> bool;
}

/// In-memory filter store
pub struct InMemoryFilterStore {
    filters: Arc<RwLock<HashMap<String, FilterCriteria>>>,
}

impl InMemoryFilterStore {
    pub fn new() -> Self {
        Self {
            filters: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryFilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStore for InMemoryFilterStore {
    fn get(&self, user_id: &str) -> Option<FilterCriteria> {
        self.filters.read().ok()?.get(user_id).cloned()
    }

    fn replace(&self, user_id: &str, criteria: FilterCriteria) -> Result<()> {
        self.filters
            .write()
            .map_err(|e| ScreenerError::SessionError(format!("lock error: {e}")))?
            .insert(user_id.to_string(), criteria);
        Ok(())
    }

    fn reset(&self, user_id: &str) -> bool {
        self.filters
            .write()
            .ok()
            .and_then(|mut filters| filters.remove(user_id))
            .is_some()
    }
}

/// Owner of the per-user filter store
pub struct SessionManager {
    store: Box<dyn FilterStore>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            store: Box::new(InMemoryFilterStore::new()),
        }
    }

    pub fn with_store(store: Box<dyn FilterStore>) -> Self {
        Self { store }
    }

    /// The user's saved criteria, or the empty default
    pub fn criteria(&self, user_id: &str) -> FilterCriteria {
        self.store.get(user_id).unwrap_or_default()
    }

    /// Replace the user's criteria as a whole
    pub fn replace(&self, user_id: &str, criteria: FilterCriteria) -> Result<()> {
        self.store.replace(user_id, criteria)
    }

    /// Drop the user's criteria
    pub fn reset(&self, user_id: &str) -> bool {
        self.store.reset(user_id)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
