//! The HTTP transport seam consumed by every facade.
//!
//! Facades talk to a [`Transport`] trait object, never to an HTTP library
//! directly. The production implementation lives in [`http`]; tests
//! substitute recording stubs.

pub mod http;
pub mod paths;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

pub use http::HttpTransport;

/// Identity role granted to service-to-service callers.
pub const SYSTEM_ROLE: &str = "SYSTEM";

// ---------------------------------------------------------------------------
// TransportConfig
// ---------------------------------------------------------------------------

/// Transport configuration fixed at facade construction.
///
/// Facades treat this as immutable: every field is set once by the builder
/// and never touched again, which is what makes a facade safe to share
/// across tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Identity role attached to every request. Empty means "let the
    /// builder default it".
    pub role: String,
    /// User-agent string identifying the calling facade.
    pub user_agent: String,
    /// Base URL relative request paths resolve against. Facades whose calls
    /// carry their own absolute target leave this empty.
    pub base_url: String,
    /// Upper bound on a single request, including connection setup.
    pub request_timeout: Duration,
}

impl TransportConfig {
    /// Fills unset identity fields with facade defaults.
    ///
    /// Empty `role` becomes [`SYSTEM_ROLE`]; empty `user_agent` becomes the
    /// given facade string. Non-empty caller-supplied values are preserved
    /// verbatim, so applying the same defaults twice is a no-op.
    #[must_use]
    pub fn with_client_defaults(mut self, user_agent: &str) -> Self {
        if self.role.is_empty() {
            self.role = SYSTEM_ROLE.to_string();
        }
        if self.user_agent.is_empty() {
            self.user_agent = user_agent.to_string();
        }
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            role: String::new(),
            user_agent: String::new(),
            base_url: String::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

// ---------------------------------------------------------------------------
// TransportError
// ---------------------------------------------------------------------------

/// Failure classes reported by a [`Transport`].
///
/// Facades wrap these without collapsing them, so callers can still tell a
/// timeout from a not-found through the error source chain.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("resource not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
    #[error("connection failed: {0}")]
    Connection(#[source] anyhow::Error),
}

// ---------------------------------------------------------------------------
// Transport trait
// ---------------------------------------------------------------------------

/// JSON-over-HTTP request execution.
///
/// Paths are either relative (resolved against the configured base URL) or
/// absolute `http(s)://` URLs used verbatim; the TURN facade relies on the
/// latter to fan out across backends. Operations with no response body
/// resolve to [`Value::Null`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns the effective configuration this transport was built with.
    fn config(&self) -> &TransportConfig;

    /// Executes a GET and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] classifying the failure.
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    /// Executes a POST with a JSON body and returns the decoded response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] classifying the failure.
    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError>;

    /// Executes a PUT with an optional JSON body and returns the decoded
    /// response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] classifying the failure.
    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError>;

    /// Executes a DELETE and returns the decoded response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] classifying the failure.
    async fn delete(&self, path: &str) -> Result<Value, TransportError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
