//! Status-based dispatch for submission events.
//!
//! A small state machine over the submission's terminal status. Every status
//! is terminal, so each delivery is dispatched exactly once and no event
//! carries further transitions.
//!
//! | Status | Action |
//! |--------|--------|
//! | `completed` | invoke [`SubmissionHooks::on_completed`] |
//! | `error` | classify (compile / runtime / unspecified), invoke [`SubmissionHooks::on_error`] |
//! | `timeout` | invoke [`SubmissionHooks::on_timeout`] |
//! | anything else | log a warning; no hook fires |
//!
//! Dispatch is total over the status and infallible from the caller's point
//! of view: hook errors are logged here and never propagate. The HTTP
//! acknowledgment depends only on validation, not on what happens in this
//! module.

use tracing::warn;

use crate::hooks::{HookError, SubmissionHooks};

use super::events::{FailureKind, SubmissionEvent, SubmissionStatus};

/// Outcome of dispatching a single delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The completed handler fired.
    Completed,
    /// The error handler fired, with the given failure classification.
    Failed(FailureKind),
    /// The timeout handler fired.
    TimedOut,
    /// The status was not recognized; no handler fired.
    ///
    /// Accepted-but-unrecognized, not an error: the sender may be newer than
    /// this receiver.
    UnknownStatus(String),
}

/// Dispatches a validated submission event to its outcome handler.
///
/// Invoked exactly once per delivery. Hook failures are logged with the
/// submission id and status and then swallowed - a failing collaborator must
/// not affect the acknowledgment or other deliveries.
pub fn dispatch_event(event: &SubmissionEvent, hooks: &dyn SubmissionHooks) -> DispatchOutcome {
    match &event.status {
        SubmissionStatus::Completed => {
            log_hook_failure(event, hooks.on_completed(event));
            DispatchOutcome::Completed
        }
        SubmissionStatus::Error => {
            let kind = event.failure_kind();
            log_hook_failure(event, hooks.on_error(event, kind));
            DispatchOutcome::Failed(kind)
        }
        SubmissionStatus::Timeout => {
            log_hook_failure(event, hooks.on_timeout(event));
            DispatchOutcome::TimedOut
        }
        SubmissionStatus::Unknown(status) => {
            warn!(
                submission_id = %event.id,
                status = %status,
                "unrecognized submission status; no handler invoked"
            );
            DispatchOutcome::UnknownStatus(status.clone())
        }
    }
}

fn log_hook_failure(event: &SubmissionEvent, result: Result<(), HookError>) {
    if let Err(error) = result {
        warn!(
            submission_id = %event.id,
            status = %event.status,
            error = %error,
            "submission hook failed; delivery already acknowledged"
        );
    }
}
