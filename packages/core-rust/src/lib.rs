//! `RTMesh` Core — wire DTOs shared by the platform's internal HTTP services.

pub mod service;
pub mod session;

pub use service::{Service, ServiceStatus};
pub use session::{Session, SessionStatistics};
