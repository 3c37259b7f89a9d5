//! Subscription registration route.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use initiator_common::error::{AppError, DecodeError};
use initiator_common::types::{Subscription, SubscriptionRequest};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/job", post(create_job))
}

/// Response for a registered subscription.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateJobResponse {
    pub id: Uuid,
}

/// POST /job: decode an external subscription and hand it to the store.
///
/// The body is read raw so that malformed or unreadable input (including a
/// body over the size limit) is reported as a 400 with a JSON error body,
/// whatever the content type.
async fn create_job(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CreateJobResponse>), AppError> {
    let body = body.map_err(DecodeError::from)?;
    let request = SubscriptionRequest::decode(&body)?;
    let subscription = Subscription::from(request);

    state.store.save(&subscription).await?;

    tracing::info!(
        subscription_id = %subscription.id,
        job_id = %subscription.job_id,
        chain_type = %subscription.chain_type,
        "Subscription created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponse {
            id: subscription.id,
        }),
    ))
}
