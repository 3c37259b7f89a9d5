//! In-process subscription store, used when no database is configured.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use initiator_common::error::StorageError;
use initiator_common::types::Subscription;

use crate::SubscriptionStore;

#[derive(Debug, Clone, Default)]
pub struct MemorySubscriptionStore {
    subscriptions: Arc<RwLock<HashMap<Uuid, Subscription>>>,
}

impl MemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Inserts are a single `HashMap::insert`, so the map is consistent even if
    // a holder panicked; poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Subscription>> {
        self.subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Subscription>> {
        self.subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a subscription by its reference id.
    pub fn get(&self, id: Uuid) -> Option<Subscription> {
        self.read().get(&id).cloned()
    }

    /// All stored subscriptions, oldest first.
    pub fn subscriptions(&self) -> Vec<Subscription> {
        let mut subs: Vec<Subscription> = self.read().values().cloned().collect();
        subs.sort_by_key(|s| s.created_at);
        subs
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubscriptionStore for MemorySubscriptionStore {
    async fn save(&self, subscription: &Subscription) -> Result<(), StorageError> {
        let mut subs = self.write();
        subs.insert(subscription.id, subscription.clone());

        tracing::debug!(
            subscription_id = %subscription.id,
            total = subs.len(),
            "Subscription stored in memory"
        );

        Ok(())
    }
}
