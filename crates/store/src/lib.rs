//! Subscription persistence.
//!
//! The API depends only on [`SubscriptionStore`]; the adapters in this crate
//! are the implementations the binary wires in at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use initiator_common::error::StorageError;
use initiator_common::types::Subscription;

pub use memory::MemorySubscriptionStore;
pub use postgres::PgSubscriptionStore;

/// A durable home for registered subscriptions.
///
/// Implementations must be safe to call from concurrent requests; callers do
/// not serialize access.
#[async_trait]
pub trait SubscriptionStore: Send + Sync + 'static {
    /// Persist a newly registered subscription.
    async fn save(&self, subscription: &Subscription) -> Result<(), StorageError>;
}
