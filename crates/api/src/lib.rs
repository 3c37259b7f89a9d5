//! HTTP surface of the external initiator.
//!
//! - `POST /job`   register an external subscription
//! - `ANY  /health` liveness probe

pub mod routes;
pub mod state;
