//! Judge Webhook Receiver - an HTTP endpoint for submission result notifications.
//!
//! This library provides the ingestion pipeline for webhook deliveries from a
//! remote code-judging service: HMAC-SHA256 signature verification over the
//! raw request body, payload parsing and validation, and status-based dispatch
//! to outcome-specific hooks.

pub mod config;
pub mod hooks;
pub mod server;
pub mod types;
pub mod webhooks;

#[cfg(test)]
pub(crate) mod test_utils;
