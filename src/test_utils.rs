//! Shared test hooks, a warning collector, and arbitrary generators for
//! property-based testing.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use tracing::field::{Field, Visit};
use tracing::span;
use tracing::{Event, Level, Metadata, Subscriber};

use crate::hooks::{HookError, SubmissionHooks};
use crate::types::SubmissionId;
use crate::webhooks::events::{FailureKind, SubmissionEvent, SubmissionStatus};

/// Returns a minimal event with id "abc123" and the given status.
pub fn sample_event(status: SubmissionStatus) -> SubmissionEvent {
    SubmissionEvent {
        id: SubmissionId::new("abc123"),
        status,
        exit_code: Some(0),
        time_secs: Some(0.5),
        memory_kb: Some(1024),
        stdout: None,
        stderr: None,
        compile_output: None,
        message: None,
    }
}

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookCall {
    Completed(SubmissionId),
    Error(SubmissionId, FailureKind),
    Timeout(SubmissionId),
}

/// Hooks implementation that records every invocation for assertions.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    calls: Mutex<Vec<HookCall>>,
}

impl RecordingHooks {
    pub fn calls(&self) -> Vec<HookCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: HookCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SubmissionHooks for RecordingHooks {
    fn on_completed(&self, event: &SubmissionEvent) -> Result<(), HookError> {
        self.record(HookCall::Completed(event.id.clone()));
        Ok(())
    }

    fn on_error(&self, event: &SubmissionEvent, kind: FailureKind) -> Result<(), HookError> {
        self.record(HookCall::Error(event.id.clone(), kind));
        Ok(())
    }

    fn on_timeout(&self, event: &SubmissionEvent) -> Result<(), HookError> {
        self.record(HookCall::Timeout(event.id.clone()));
        Ok(())
    }
}

/// Hooks implementation that always fails, for isolation tests.
#[derive(Debug, Clone, Copy)]
pub struct FailingHooks;

impl SubmissionHooks for FailingHooks {
    fn on_completed(&self, _event: &SubmissionEvent) -> Result<(), HookError> {
        Err(HookError::new("completed hook exploded"))
    }

    fn on_error(&self, _event: &SubmissionEvent, _kind: FailureKind) -> Result<(), HookError> {
        Err(HookError::new("error hook exploded"))
    }

    fn on_timeout(&self, _event: &SubmissionEvent) -> Result<(), HookError> {
        Err(HookError::new("timeout hook exploded"))
    }
}

/// Captures `warn!` events emitted on the current thread while the guard
/// returned by [`WarningCollector::install`] is alive.
///
/// Tests use this to assert that warnings the receiver promises (disabled
/// verification, unrecognized status) are actually observable, not just
/// implied by control flow.
#[derive(Clone, Default)]
pub struct WarningCollector {
    messages: Arc<Mutex<Vec<String>>>,
}

impl WarningCollector {
    /// Installs this collector as the thread-default subscriber.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(CollectingSubscriber {
            collector: self.clone(),
        })
    }

    /// Returns every warning recorded so far, fields flattened into one
    /// string per event.
    pub fn warnings(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Returns true if any recorded warning contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(needle))
    }
}

struct CollectingSubscriber {
    collector: WarningCollector,
}

impl Subscriber for CollectingSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }

    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut message = String::new();
        event.record(&mut FlattenVisitor(&mut message));
        self.collector.messages.lock().unwrap().push(message);
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

struct FlattenVisitor<'a>(&'a mut String);

impl Visit for FlattenVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        let _ = write!(self.0, "{}={:?}", field.name(), value);
    }
}

pub fn arb_status() -> impl Strategy<Value = SubmissionStatus> {
    prop_oneof![
        Just(SubmissionStatus::Completed),
        Just(SubmissionStatus::Error),
        Just(SubmissionStatus::Timeout),
        "[a-z_]{0,20}".prop_map(|s| SubmissionStatus::parse(&s)),
    ]
}
