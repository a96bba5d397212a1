//! Outbound side-effect seam for dispatched submission events.
//!
//! The dispatcher does not contain downstream business logic. Instead it
//! invokes a [`SubmissionHooks`] implementation, which is where external
//! collaborators (persistence, user notification, statistics, leaderboards)
//! plug in. The core guarantees each hook fires at most once per delivery,
//! with the fully validated event.
//!
//! Hook failures are caught at the dispatch boundary and logged; they never
//! reach the HTTP caller, whose acknowledgment was already determined by
//! validation success.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::webhooks::events::{FailureKind, SubmissionEvent};

/// Error returned by a hook implementation.
///
/// Carries a message only; the dispatcher logs it together with the
/// submission id and status, which is all the diagnostic context the core
/// can add.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HookError(String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        HookError(message.into())
    }
}

/// Outcome-specific handlers for dispatched submission events.
///
/// Implementations must be cheap or internally asynchronous: hooks run on the
/// request path, before the acknowledgment is sent.
pub trait SubmissionHooks: Send + Sync {
    /// A submission ran to completion.
    fn on_completed(&self, event: &SubmissionEvent) -> Result<(), HookError>;

    /// A submission failed, with the dispatcher's classification.
    fn on_error(&self, event: &SubmissionEvent, kind: FailureKind) -> Result<(), HookError>;

    /// A submission exceeded its time limit.
    fn on_timeout(&self, event: &SubmissionEvent) -> Result<(), HookError>;
}

impl<T: SubmissionHooks + ?Sized> SubmissionHooks for Arc<T> {
    fn on_completed(&self, event: &SubmissionEvent) -> Result<(), HookError> {
        (**self).on_completed(event)
    }

    fn on_error(&self, event: &SubmissionEvent, kind: FailureKind) -> Result<(), HookError> {
        (**self).on_error(event, kind)
    }

    fn on_timeout(&self, event: &SubmissionEvent) -> Result<(), HookError> {
        (**self).on_timeout(event)
    }
}

/// Default hooks implementation: records each outcome in the log and nothing
/// else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHooks;

impl SubmissionHooks for LoggingHooks {
    fn on_completed(&self, event: &SubmissionEvent) -> Result<(), HookError> {
        info!(
            submission_id = %event.id,
            exit_code = event.exit_code,
            time_secs = event.time_secs,
            memory_kb = event.memory_kb,
            "submission completed successfully"
        );
        Ok(())
    }

    fn on_error(&self, event: &SubmissionEvent, kind: FailureKind) -> Result<(), HookError> {
        info!(
            submission_id = %event.id,
            failure = %kind,
            exit_code = event.exit_code,
            "submission failed"
        );
        Ok(())
    }

    fn on_timeout(&self, event: &SubmissionEvent) -> Result<(), HookError> {
        info!(
            submission_id = %event.id,
            time_secs = event.time_secs,
            "submission exceeded time limit"
        );
        Ok(())
    }
}
