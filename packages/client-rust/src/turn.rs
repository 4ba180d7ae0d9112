//! Typed facade over the TURN backend session API.
//!
//! One facade instance fans out to many TURN backends: every call names its
//! target base URL explicitly, so the transport base URL is deliberately
//! blanked at construction.

use async_trait::async_trait;
use rtmesh_core::{Session, SessionStatistics};

use crate::error::ClientError;
use crate::operation::{decode, encode, execute};
use crate::trace::{Tracer, TracingTracer};
use crate::transport::{paths, HttpTransport, Transport, TransportConfig};

/// User-agent the TURN facade identifies itself with when the caller does
/// not supply one.
pub const TURN_USER_AGENT: &str = "turnserver/restClient";

/// Operations of the TURN session API.
#[async_trait]
pub trait TurnClient: Send + Sync {
    /// Registers a session at the given backend. Side-effecting; the
    /// response body carries nothing of interest.
    ///
    /// # Errors
    ///
    /// Returns a wrapped transport error identifying the session's user.
    async fn register(&self, base_url: &str, session: Session) -> Result<(), ClientError>;

    /// Unregisters a user's session at the given backend. Idempotent from
    /// the caller's perspective: the facade adds no error class of its own
    /// for missing sessions.
    ///
    /// # Errors
    ///
    /// Surfaces whatever the transport reports, wrapped with the user id.
    async fn unregister(&self, base_url: &str, user_id: &str) -> Result<(), ClientError>;

    /// Fetches the session statistics snapshot of the given backend.
    /// Read-only and safe to retry.
    ///
    /// # Errors
    ///
    /// Returns a wrapped transport error on any non-success response.
    async fn statistics(&self, base_url: &str) -> Result<SessionStatistics, ClientError>;
}

// ---------------------------------------------------------------------------
// TurnRestClient
// ---------------------------------------------------------------------------

/// Production [`TurnClient`] over a generic [`Transport`].
pub struct TurnRestClient<T = HttpTransport> {
    http: T,
    tracer: Box<dyn Tracer>,
}

impl TurnRestClient<HttpTransport> {
    /// Builds a TURN client from transport configuration, defaulting the
    /// identity role and user-agent when unset. The base URL is cleared:
    /// each call supplies its own target.
    #[must_use]
    pub fn new(config: TransportConfig) -> Self {
        let mut config = config.with_client_defaults(TURN_USER_AGENT);
        config.base_url = String::new();
        Self::with_transport(HttpTransport::new(config))
    }
}

impl<T: Transport> TurnRestClient<T> {
    /// Builds a TURN client over an existing transport.
    #[must_use]
    pub fn with_transport(http: T) -> Self {
        Self {
            http,
            tracer: Box::new(TracingTracer),
        }
    }

    /// Replaces the tracer. Mostly useful for tests and custom pipelines.
    #[must_use]
    pub fn with_tracer(mut self, tracer: impl Tracer + 'static) -> Self {
        self.tracer = Box::new(tracer);
        self
    }

    /// Effective transport configuration after defaulting.
    pub fn config(&self) -> &TransportConfig {
        self.http.config()
    }
}

fn sessions_url(base_url: &str) -> String {
    format!("{}/v1/sessions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl<T: Transport> TurnClient for TurnRestClient<T> {
    async fn register(&self, base_url: &str, session: Session) -> Result<(), ClientError> {
        execute(
            self.tracer.as_ref(),
            "turnserver.restClient.Register",
            true,
            || format!("failed to register {session}"),
            async {
                let body = encode(&session)?;
                self.http.post(&sessions_url(base_url), body).await?;
                Ok(())
            },
        )
        .await
    }

    async fn unregister(&self, base_url: &str, user_id: &str) -> Result<(), ClientError> {
        execute(
            self.tracer.as_ref(),
            "turnserver.restClient.Unregister",
            true,
            || format!("failed to unregister user(id={user_id})"),
            async {
                let url = format!(
                    "{}/{}",
                    sessions_url(base_url),
                    paths::segment(user_id)
                );
                self.http.delete(&url).await?;
                Ok(())
            },
        )
        .await
    }

    async fn statistics(&self, base_url: &str) -> Result<SessionStatistics, ClientError> {
        execute(
            self.tracer.as_ref(),
            "turnserver.restClient.GetStatistics",
            true,
            || "failed to retrieve turn-server session statistics".to_string(),
            async {
                let url = format!("{}/statistics", sessions_url(base_url));
                let value = self.http.get(&url).await?;
                decode(value)
            },
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
