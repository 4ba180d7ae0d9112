//! `RTMesh` Client — typed facades over the platform's internal HTTP services.
//!
//! Every facade is the same shape: a domain trait ([`RegistryClient`],
//! [`TurnClient`]) with one REST implementation over the [`Transport`] seam,
//! and every operation runs through one wrapper that handles span lifecycle
//! and error contextualization. Adding a backend operation means picking a
//! path template and request/response shapes; the instrumentation comes for
//! free.

pub mod error;
pub mod registry;
pub mod trace;
pub mod transport;
pub mod turn;

mod operation;
#[cfg(test)]
pub(crate) mod testing;

pub use error::ClientError;
pub use registry::{RegistryClient, RegistryRestClient, REGISTRY_USER_AGENT};
pub use trace::{Span, Tracer, TracingTracer};
pub use transport::{HttpTransport, Transport, TransportConfig, TransportError, SYSTEM_ROLE};
pub use turn::{TurnClient, TurnRestClient, TURN_USER_AGENT};
