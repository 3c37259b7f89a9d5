use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DecodeError;

/// Job type discriminator. Only external subscriptions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    External,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::External => write!(f, "external"),
        }
    }
}

/// Connection settings for the upstream chain endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    pub endpoint: String,
    #[serde(default)]
    pub chain_id: String,
    /// Seconds between refreshes. Passed through as sent.
    #[serde(default)]
    pub refresh_interval: i64,
}

/// The `params` payload of a subscription request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionParams {
    /// Chain family to monitor (e.g. "ethereum").
    #[serde(rename = "type")]
    pub chain_type: String,
    pub config: EndpointConfig,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Body of `POST /job`.
///
/// `jobID`, `type`, `params`, `params.type`, `params.config` and
/// `params.config.endpoint` are required: a body missing any of them is
/// rejected rather than filled with empty values, as is any `type` other than
/// `"external"`. `chainId`, `refreshInterval`, `addresses` and `topics`
/// default to empty/zero. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    #[serde(rename = "jobID")]
    pub job_id: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub params: SubscriptionParams,
}

impl SubscriptionRequest {
    /// Decode a raw request body.
    ///
    /// Only the shape is checked: URLs, address lists and job ids are taken as sent.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A registered external subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subscription {
    /// Reference id handed back to the caller.
    pub id: Uuid,
    pub job_id: String,
    pub chain_type: String,
    pub endpoint: String,
    pub chain_id: String,
    pub refresh_interval: i64,
    pub addresses: Vec<String>,
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SubscriptionRequest> for Subscription {
    fn from(req: SubscriptionRequest) -> Self {
        let SubscriptionParams {
            chain_type,
            config,
            addresses,
            topics,
        } = req.params;

        Self {
            id: Uuid::new_v4(),
            job_id: req.job_id,
            chain_type,
            endpoint: config.endpoint,
            chain_id: config.chain_id,
            refresh_interval: config.refresh_interval,
            addresses,
            topics,
            created_at: Utc::now(),
        }
    }
}
