//! Health check endpoint for liveness probes.
//!
//! Reports whether the process is up and whether a webhook secret is
//! configured, so operational monitoring can detect a receiver accidentally
//! running in verification-disabled mode.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub webhook_secret_configured: bool,
}

/// Health check handler.
///
/// Always returns 200 when the server is running; consumers inspect the body
/// for the secret-configured flag.
pub async fn health_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        webhook_secret_configured: app_state.webhook_secret().is_some(),
    })
}
