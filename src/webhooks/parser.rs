//! Webhook payload parser.
//!
//! Parses raw delivery bodies into typed [`SubmissionEvent`] values.
//!
//! # Parsing Strategy
//!
//! 1. The body is deserialized as JSON; malformed input is an error
//! 2. The presence of a non-empty `submission.id` is validated explicitly
//! 3. `status` is NOT validated against the known set - unrecognized values
//!    pass through as [`SubmissionStatus::Unknown`] for the dispatcher to
//!    handle (forward compatibility with new sender statuses)
//! 4. Unknown or extra JSON fields are ignored, not errors
//!
//! The parser must only ever see bytes that already passed signature
//! verification; it never runs for unauthenticated deliveries.

use serde::Deserialize;
use thiserror::Error;

use crate::types::SubmissionId;

use super::events::{SubmissionEvent, SubmissionStatus};

/// Error type for payload parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not well-formed JSON.
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A required field is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

// Raw deserialization targets. Fields are Option so that structural
// validation stays explicit and produces MissingField instead of an opaque
// serde error.

#[derive(Debug, Deserialize)]
struct RawPayload {
    submission: Option<RawSubmission>,
}

#[derive(Debug, Deserialize)]
struct RawSubmission {
    id: Option<String>,
    status: Option<String>,
    exit_code: Option<i32>,
    time: Option<f64>,
    memory: Option<u64>,
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
    message: Option<String>,
}

/// Parses a webhook delivery body into a [`SubmissionEvent`].
///
/// # Returns
///
/// * `Ok(event)` - the body is valid JSON with a non-empty `submission.id`
/// * `Err(ParseError::InvalidJson)` - malformed JSON
/// * `Err(ParseError::MissingField)` - no `submission` object, or an
///   absent/empty `submission.id`
///
/// # Examples
///
/// ```
/// use judge_webhook::webhooks::parse_submission_event;
///
/// let body = br#"{"submission":{"id":"abc123","status":"completed","exit_code":0}}"#;
/// let event = parse_submission_event(body).unwrap();
/// assert_eq!(event.id.as_str(), "abc123");
/// ```
pub fn parse_submission_event(payload: &[u8]) -> Result<SubmissionEvent, ParseError> {
    let raw: RawPayload = serde_json::from_slice(payload)?;

    let submission = raw
        .submission
        .ok_or(ParseError::MissingField("submission"))?;

    let id = match submission.id {
        Some(id) if !id.is_empty() => SubmissionId::new(id),
        _ => return Err(ParseError::MissingField("submission.id")),
    };

    // A missing status behaves like an unrecognized one: the dispatcher
    // routes it to the unknown-status path.
    let status = SubmissionStatus::parse(submission.status.as_deref().unwrap_or(""));

    Ok(SubmissionEvent {
        id,
        status,
        exit_code: submission.exit_code,
        time_secs: submission.time,
        memory_kb: submission.memory,
        stdout: submission.stdout,
        stderr: submission.stderr,
        compile_output: submission.compile_output,
        message: submission.message,
    })
}
