//! Health check endpoint.

use axum::routing::any;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", any(health_check))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "external-initiator",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
