//! Webhook ingestion pipeline.
//!
//! This module provides, in processing order:
//! - Signature verification over the raw delivery body (HMAC-SHA256)
//! - Payload parsing and structural validation
//! - Status-based dispatch to outcome hooks

pub mod events;
pub mod handlers;
pub mod parser;
pub mod signature;

pub use events::{FailureKind, SubmissionEvent, SubmissionStatus};
pub use handlers::{DispatchOutcome, dispatch_event};
pub use parser::{ParseError, parse_submission_event};
pub use signature::{compute_signature, encode_signature, verify_signature};
