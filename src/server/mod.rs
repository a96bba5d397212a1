//! HTTP server for the webhook receiver.
//!
//! # Endpoints
//!
//! - `POST /webhooks/judge` - Accepts submission result deliveries
//! - `GET /health` - Liveness probe (reports whether a secret is configured)
//! - `POST /test-webhook` - Manual connectivity test, no verification

use std::sync::Arc;

pub mod health;
pub mod test_webhook;
pub mod webhook;

pub use health::health_handler;
pub use test_webhook::test_webhook_handler;
pub use webhook::webhook_handler;

use crate::hooks::SubmissionHooks;

/// Shared application state.
///
/// Passed to all handlers via Axum's `State` extractor. Immutable for the
/// process lifetime: concurrent deliveries share it read-only, so no locking
/// is needed.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Webhook secret for HMAC-SHA256 signature verification.
    ///
    /// `None` disables verification (open mode for development).
    webhook_secret: Option<Vec<u8>>,

    /// Outcome handlers invoked by the dispatcher.
    hooks: Box<dyn SubmissionHooks>,
}

impl AppState {
    /// Creates a new `AppState` with the given secret and outcome hooks.
    pub fn new(
        webhook_secret: Option<Vec<u8>>,
        hooks: impl SubmissionHooks + 'static,
    ) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                webhook_secret,
                hooks: Box::new(hooks),
            }),
        }
    }

    /// Returns the webhook secret, if configured.
    pub fn webhook_secret(&self) -> Option<&[u8]> {
        self.inner.webhook_secret.as_deref()
    }

    /// Returns the outcome hooks.
    pub fn hooks(&self) -> &dyn SubmissionHooks {
        self.inner.hooks.as_ref()
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/webhooks/judge", post(webhook_handler))
        .route("/test-webhook", post(test_webhook_handler))
        .route("/health", get(health_handler))
        .with_state(app_state)
}
