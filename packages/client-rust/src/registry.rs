//! Typed facade over the service-registry HTTP API.

use async_trait::async_trait;
use rtmesh_core::{Service, ServiceStatus};

use crate::error::ClientError;
use crate::operation::{decode, encode, execute};
use crate::trace::{Tracer, TracingTracer};
use crate::transport::{paths, HttpTransport, Transport, TransportConfig};

/// User-agent the registry facade identifies itself with when the caller
/// does not supply one.
pub const REGISTRY_USER_AGENT: &str = "serviceregistry/restClient";

/// Operations of the service-registry API.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Registers a service and returns the registry's canonical record,
    /// which may differ from the input (assigned id, initial status).
    ///
    /// # Errors
    ///
    /// Returns a wrapped transport error on any non-success response.
    async fn register(&self, service: Service) -> Result<Service, ClientError>;

    /// Fetches a single service by id.
    ///
    /// # Errors
    ///
    /// Not-found and other transport failures surface as the same wrapped
    /// error; callers needing the distinction inspect the cause.
    async fn find(&self, id: &str) -> Result<Service, ClientError>;

    /// Fetches services belonging to an application, optionally restricted
    /// to healthy ones. An empty result is an empty vector, never an error.
    ///
    /// # Errors
    ///
    /// Returns a wrapped transport error naming the application.
    async fn find_by_application(
        &self,
        application: &str,
        only_healthy: bool,
    ) -> Result<Vec<Service>, ClientError>;

    /// Sets the status of a registered service. Purely side-effecting.
    ///
    /// # Errors
    ///
    /// Returns a wrapped transport error on any non-success response.
    async fn set_status(&self, id: &str, status: ServiceStatus) -> Result<(), ClientError>;
}

// ---------------------------------------------------------------------------
// RegistryRestClient
// ---------------------------------------------------------------------------

/// Production [`RegistryClient`] over a generic [`Transport`].
pub struct RegistryRestClient<T = HttpTransport> {
    http: T,
    tracer: Box<dyn Tracer>,
}

impl RegistryRestClient<HttpTransport> {
    /// Builds a registry client from transport configuration, defaulting the
    /// identity role and user-agent when unset.
    #[must_use]
    pub fn new(config: TransportConfig) -> Self {
        let config = config.with_client_defaults(REGISTRY_USER_AGENT);
        Self::with_transport(HttpTransport::new(config))
    }
}

impl<T: Transport> RegistryRestClient<T> {
    /// Builds a registry client over an existing transport.
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

#[async_trait]
impl<T: Transport> RegistryClient for RegistryRestClient<T> {
    async fn register(&self, service: Service) -> Result<Service, ClientError> {
        execute(
            self.tracer.as_ref(),
            "serviceregistry_rest_client_register",
            false,
            || "failed to register service".to_string(),
            async {
                let body = encode(&service)?;
                let value = self.http.post("/v1/services", body).await?;
                decode(value)
            },
        )
        .await
    }

    async fn find(&self, id: &str) -> Result<Service, ClientError> {
        execute(
            self.tracer.as_ref(),
            "serviceregistry_rest_client_find",
            false,
            || format!("failed to find service(id={id})"),
            async {
                let path = format!("/v1/services/{}", paths::segment(id));
                let value = self.http.get(&path).await?;
                decode(value)
            },
        )
        .await
    }

    async fn find_by_application(
        &self,
        application: &str,
        only_healthy: bool,
    ) -> Result<Vec<Service>, ClientError> {
        execute(
            self.tracer.as_ref(),
            "serviceregistry_rest_client_find_by_application",
            false,
            || format!("failed to find services for application = {application}"),
            async {
                let path = format!(
                    "/v1/services?application={}&only-healthy={only_healthy}",
                    paths::query_value(application)
                );
                let value = self.http.get(&path).await?;
                // An absent body still means "no matches", not an error.
                if value.is_null() {
                    Ok(Vec::new())
                } else {
                    decode(value)
                }
            },
        )
        .await
    }

    async fn set_status(&self, id: &str, status: ServiceStatus) -> Result<(), ClientError> {
        execute(
            self.tracer.as_ref(),
            "serviceregistry_rest_client_set_status",
            false,
            || format!("failed to set status {status} for service(id={id})"),
            async {
                let path = format!(
                    "/v1/services/{}/status/{status}",
                    paths::segment(id)
                );
                self.http.put(&path, None).await?;
                Ok(())
            },
        )
        .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
