//! Webhook receiver endpoint.
//!
//! Accepts deliveries from the judging service, verifies the signature over
//! the raw body, parses and validates the payload, dispatches it, and
//! acknowledges. The acknowledgment reflects "accepted for processing", not
//! "processing complete": hook failures inside dispatch are logged and cannot
//! change the response.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::AppState;
use crate::types::SubmissionId;
use crate::webhooks::handlers::dispatch_event;
use crate::webhooks::parser::{ParseError, parse_submission_event};
use crate::webhooks::signature::verify_signature;

/// Header carrying the hex-encoded HMAC-SHA256 of the body.
const HEADER_SIGNATURE: &str = "x-judge-signature";
/// Header naming the event that produced this delivery (informational).
const HEADER_EVENT: &str = "x-judge-event";
/// Header carrying the submission id (informational; the body is authoritative).
const HEADER_SUBMISSION_ID: &str = "x-judge-submission-id";

/// Errors that terminate a delivery before dispatch.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature did not match the body (or was absent/malformed).
    #[error("invalid signature")]
    InvalidSignature,

    /// The body is not well-formed JSON.
    #[error("invalid JSON body")]
    InvalidJson(#[source] serde_json::Error),

    /// The payload lacks a required field.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl From<ParseError> for WebhookError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::InvalidJson(e) => WebhookError::InvalidJson(e),
            ParseError::MissingField(field) => WebhookError::MissingField(field),
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::InvalidSignature => StatusCode::UNAUTHORIZED,
            WebhookError::InvalidJson(_) | WebhookError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Acknowledgment body for an accepted delivery.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
    pub submission_id: SubmissionId,
    pub timestamp: DateTime<Utc>,
}

/// Webhook handler.
///
/// # Request
///
/// - Method: POST
/// - Headers:
///   - `X-Judge-Signature`: hex HMAC-SHA256 of the body (required when a
///     secret is configured; its absence verifies like an empty signature)
///   - `X-Judge-Event`, `X-Judge-Submission-Id`: informational, logged only
/// - Body: JSON submission result payload
///
/// # Response
///
/// - 200 OK `{"status":"received","submission_id":…,"timestamp":…}`
/// - 401 Unauthorized on signature failure (no payload inspection occurs)
/// - 400 Bad Request on malformed JSON or a missing `submission.id`
pub async fn webhook_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, WebhookError> {
    let signature = optional_header(&headers, HEADER_SIGNATURE).unwrap_or_default();
    let event_name = optional_header(&headers, HEADER_EVENT);
    let claimed_id = optional_header(&headers, HEADER_SUBMISSION_ID);

    debug!(
        event = event_name.as_deref().unwrap_or("-"),
        submission_id = claimed_id.as_deref().unwrap_or("-"),
        body_len = body.len(),
        "received webhook delivery"
    );

    // Verify over the raw bytes BEFORE any parsing. The signature covers
    // exactly what the sender serialized; a re-encoded body would not match.
    // A failed signature also means no structural details leak to the caller.
    match app_state.webhook_secret() {
        None => {
            warn!("webhook secret not configured; accepting delivery without verification");
        }
        Some(secret) => {
            if !verify_signature(&body, &signature, Some(secret)) {
                warn!(
                    submission_id = claimed_id.as_deref().unwrap_or("-"),
                    "invalid webhook signature"
                );
                return Err(WebhookError::InvalidSignature);
            }
        }
    }

    let event = parse_submission_event(&body)?;

    // Dispatch runs before the acknowledgment, but hook failures are caught
    // and logged inside dispatch_event; nothing from here can abort the 200.
    let outcome = dispatch_event(&event, app_state.hooks());

    info!(
        submission_id = %event.id,
        status = %event.status,
        outcome = ?outcome,
        "webhook delivery processed"
    );

    Ok(Json(WebhookAck {
        status: "received",
        submission_id: event.id.clone(),
        timestamp: Utc::now(),
    }))
}

/// Extracts an optional header value as a string.
fn optional_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
