//! Manual test endpoint.
//!
//! Accepts any JSON body without verification and echoes an acknowledgment.
//! Useful for checking connectivity before wiring up the real sender; never
//! dispatches anything.

use axum::Json;
use tracing::info;

/// Test webhook handler.
pub async fn test_webhook_handler(
    Json(payload): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    info!(payload = %payload, "test webhook received");
    Json(serde_json::json!({ "status": "test received" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_acknowledgment() {
        let body = serde_json::json!({"hello": "world"});
        let Json(response) = test_webhook_handler(Json(body)).await;
        assert_eq!(response["status"], "test received");
    }
}
