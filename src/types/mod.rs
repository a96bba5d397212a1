//! Core domain types for the webhook receiver.

pub mod ids;

pub use ids::SubmissionId;
