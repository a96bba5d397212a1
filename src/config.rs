//! Process configuration, loaded once at startup from the environment.
//!
//! Core logic never reads ambient environment state; the configuration is
//! materialized here and passed explicitly into the server state.

use std::env;

use tracing::warn;

/// Default listen port when `PORT` is absent or invalid.
const DEFAULT_PORT: u16 = 9000;

/// Default listen host when `HOST` is absent.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind the HTTP server to.
    pub host: String,

    /// Port to bind the HTTP server to.
    pub port: u16,

    /// Shared secret for webhook signature verification.
    ///
    /// `None` means verification is disabled. This is a deliberate open mode
    /// for local development; it is logged loudly at startup and on every
    /// delivery, never silently assumed.
    pub webhook_secret: Option<Vec<u8>>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Reads `HOST`, `PORT`, and `WEBHOOK_SECRET`. Invalid values fall back
    /// to defaults with a warning rather than aborting startup; an empty
    /// `WEBHOOK_SECRET` is equivalent to an absent one.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let host = lookup("HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "invalid PORT value; using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let webhook_secret = lookup("WEBHOOK_SECRET")
            .filter(|s| !s.is_empty())
            .map(String::into_bytes);

        Config {
            host,
            port,
            webhook_secret,
        }
    }
}
