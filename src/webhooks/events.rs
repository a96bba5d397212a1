//! Typed submission result events.
//!
//! The judging service reports one terminal status per submission; no further
//! updates follow for the same identifier. Statuses outside the known set are
//! carried through as [`SubmissionStatus::Unknown`] rather than rejected, so
//! senders can add new terminal states without breaking ingestion.

use std::fmt;

use crate::types::SubmissionId;

/// Terminal status of a submission, as reported by the judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// The submission ran to completion.
    Completed,
    /// The submission failed (compile or runtime failure, see [`FailureKind`]).
    Error,
    /// The submission exceeded its time limit.
    Timeout,
    /// A status string this receiver does not recognize.
    ///
    /// Deliberately not an error: unknown statuses are accepted and logged,
    /// but no handler fires for them.
    Unknown(String),
}

impl SubmissionStatus {
    /// Parses a status string. Total: unrecognized values map to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => SubmissionStatus::Completed,
            "error" => SubmissionStatus::Error,
            "timeout" => SubmissionStatus::Timeout,
            other => SubmissionStatus::Unknown(other.to_string()),
        }
    }

    /// Returns the wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionStatus::Completed => "completed",
            SubmissionStatus::Error => "error",
            SubmissionStatus::Timeout => "timeout",
            SubmissionStatus::Unknown(s) => s,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of an `error` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The submission failed to compile (compile output present).
    Compile,
    /// The submission compiled but exited with a non-zero code.
    Runtime,
    /// An error status with no compile output and a zero/absent exit code.
    Unspecified,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Compile => "compile",
            FailureKind::Runtime => "runtime",
            FailureKind::Unspecified => "unspecified",
        };
        write!(f, "{}", s)
    }
}

/// A validated submission result event, parsed from one webhook delivery.
///
/// Immutable once constructed; scoped to a single request. Text fields are
/// carried untruncated - trimming for display is a logging concern, not a
/// data-model concern.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionEvent {
    /// The submission this result belongs to. Guaranteed non-empty.
    pub id: SubmissionId,

    /// The terminal status.
    pub status: SubmissionStatus,

    /// Process exit code, if the submission ran.
    pub exit_code: Option<i32>,

    /// Wall-clock execution time in seconds.
    pub time_secs: Option<f64>,

    /// Peak memory usage in kilobytes.
    pub memory_kb: Option<u64>,

    /// Captured standard output.
    pub stdout: Option<String>,

    /// Captured standard error.
    pub stderr: Option<String>,

    /// Compiler output, present when compilation produced diagnostics.
    pub compile_output: Option<String>,

    /// Free-form message from the judge.
    pub message: Option<String>,
}

impl SubmissionEvent {
    /// Classifies a failed submission.
    ///
    /// Compile output takes precedence over the exit code: a submission that
    /// never compiled has no meaningful exit code even if one is reported.
    pub fn failure_kind(&self) -> FailureKind {
        if self.compile_output.as_deref().is_some_and(|out| !out.is_empty()) {
            FailureKind::Compile
        } else if self.exit_code.unwrap_or(0) != 0 {
            FailureKind::Runtime
        } else {
            FailureKind::Unspecified
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_event;

    #[test]
    fn parse_known_statuses() {
        assert_eq!(SubmissionStatus::parse("completed"), SubmissionStatus::Completed);
        assert_eq!(SubmissionStatus::parse("error"), SubmissionStatus::Error);
        assert_eq!(SubmissionStatus::parse("timeout"), SubmissionStatus::Timeout);
    }

    #[test]
    fn parse_unknown_status_preserves_value() {
        assert_eq!(
            SubmissionStatus::parse("weird_new_status"),
            SubmissionStatus::Unknown("weird_new_status".to_string())
        );
        assert_eq!(
            SubmissionStatus::parse(""),
            SubmissionStatus::Unknown(String::new())
        );
    }

    #[test]
    fn display_roundtrips_wire_format() {
        assert_eq!(SubmissionStatus::Completed.to_string(), "completed");
        assert_eq!(
            SubmissionStatus::Unknown("stale".to_string()).to_string(),
            "stale"
        );
    }

    #[test]
    fn failure_kind_compile_output_wins() {
        let mut event = sample_event(SubmissionStatus::Error);
        event.compile_output = Some("expected ';' on line 3".to_string());
        event.exit_code = Some(1);

        assert_eq!(event.failure_kind(), FailureKind::Compile);
    }

    #[test]
    fn failure_kind_empty_compile_output_is_not_compile() {
        let mut event = sample_event(SubmissionStatus::Error);
        event.compile_output = Some(String::new());
        event.exit_code = Some(1);

        assert_eq!(event.failure_kind(), FailureKind::Runtime);
    }

    #[test]
    fn failure_kind_nonzero_exit_is_runtime() {
        let mut event = sample_event(SubmissionStatus::Error);
        event.exit_code = Some(139);

        assert_eq!(event.failure_kind(), FailureKind::Runtime);
    }

    #[test]
    fn failure_kind_default_is_unspecified() {
        let mut event = sample_event(SubmissionStatus::Error);
        event.exit_code = None;
        assert_eq!(event.failure_kind(), FailureKind::Unspecified);

        event.exit_code = Some(0);
        assert_eq!(event.failure_kind(), FailureKind::Unspecified);
    }
}
