//! Default [`Transport`] implementation backed by `reqwest`.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Method;
use serde_json::Value;

use super::{Transport, TransportConfig, TransportError};

/// Header carrying the caller's identity role. Token exchange happens at the
/// deployment edge; internal services only see the role claim.
pub const ROLE_HEADER: &str = "x-rtmesh-role";

/// Production JSON-over-HTTP transport.
pub struct HttpTransport {
    config: TransportConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport from the given configuration.
    ///
    /// Construction never fails: if the configured client cannot be built,
    /// a default client without the per-request timeout is used instead.
    #[must_use]
    pub fn new(config: TransportConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    fn resolve(&self, path: &str) -> Result<String, TransportError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(path.to_string());
        }

        if self.config.base_url.is_empty() {
            return Err(TransportError::InvalidUrl(format!(
                "relative path {path} requires a configured base url"
            )));
        }

        Ok(format!(
            "{}{path}",
            self.config.base_url.trim_end_matches('/')
        ))
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let url = self.resolve(path)?;

        let mut request = self
            .client
            .request(method, &url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ROLE_HEADER, &self.config.role);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(map_send_error)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(status_error(status));
        }

        let bytes = response.bytes().await.map_err(map_send_error)?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(TransportError::Decode)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn config(&self) -> &TransportConfig {
        &self.config
    }

    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        self.execute(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value, TransportError> {
        self.execute(Method::PUT, path, body).await
    }

    async fn delete(&self, path: &str) -> Result<Value, TransportError> {
        self.execute(Method::DELETE, path, None).await
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(anyhow::Error::new(err))
    }
}

fn status_error(status: u16) -> TransportError {
    match status {
        404 => TransportError::NotFound,
        401 | 403 => TransportError::Unauthorized,
        status => TransportError::Status { status },
    }
}
