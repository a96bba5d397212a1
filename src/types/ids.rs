//! Newtype wrappers for domain identifiers.
//!
//! These types prevent accidental mixing of identifiers with plain strings
//! and make the code more self-documenting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of a submission on the judging service.
///
/// Opaque to the receiver: we never interpret its contents, only echo it back
/// in acknowledgments and attach it to log records. The parser guarantees it
/// is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn new(s: impl Into<String>) -> Self {
        SubmissionId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
