//! PostgreSQL-backed subscription store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use initiator_common::error::StorageError;
use initiator_common::types::Subscription;

use crate::SubscriptionStore;

#[derive(Debug, Clone)]
pub struct PgSubscriptionStore {
    pool: PgPool,
}

impl PgSubscriptionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a subscription by its reference id.
    pub async fn get(&self, id: Uuid) -> Result<Option<Subscription>, StorageError> {
        let sub: Option<Subscription> =
            sqlx::query_as("SELECT * FROM subscriptions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(sub)
    }
}

#[async_trait]
impl SubscriptionStore for PgSubscriptionStore {
    async fn save(&self, subscription: &Subscription) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions
                (id, job_id, chain_type, endpoint, chain_id, refresh_interval, addresses, topics, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(subscription.id)
        .bind(&subscription.job_id)
        .bind(&subscription.chain_type)
        .bind(&subscription.endpoint)
        .bind(&subscription.chain_id)
        .bind(subscription.refresh_interval)
        .bind(&subscription.addresses)
        .bind(&subscription.topics)
        .bind(subscription.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            subscription_id = %subscription.id,
            job_id = %subscription.job_id,
            "Subscription persisted"
        );

        Ok(())
    }
}
