//! Application state for the expense splitting API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::TripStore;

/// Shared application state.
///
/// Wraps the [`TripStore`] behind a read-write lock so concurrent requests
/// serialize their mutations; the engine itself stays single-threaded and
/// stateless between calls.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<RwLock<TripStore>>,
}

impl AppState {
    /// Creates application state with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared store lock.
    pub fn store(&self) -> &RwLock<TripStore> {
        &self.store
    }
}
