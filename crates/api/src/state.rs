//! Shared application state for the Axum API server.

use std::sync::Arc;

use initiator_store::SubscriptionStore;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubscriptionStore>,
}

impl AppState {
    pub fn new(store: impl SubscriptionStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build state around a store handle the caller keeps a reference to.
    pub fn from_shared(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }
}
