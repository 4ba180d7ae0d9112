//! Service registry DTOs.
//!
//! Wire format is JSON with camelCase field names. The registry service owns
//! the authoritative record; these types only marshal it to and from the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Health and lifecycle status of a registered service.
///
/// Serializes as the bare variant name (`"Healthy"`), which is also what the
/// registry embeds in status-change paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Status has not been reported yet.
    #[default]
    Unknown,
    /// Passing health checks.
    Healthy,
    /// Failing health checks but still registered.
    Unhealthy,
    /// Explicitly removed from rotation.
    Deregistered,
}

impl ServiceStatus {
    /// Returns `true` only for `Healthy`.
    #[must_use]
    pub fn is_healthy(self) -> bool {
        self == ServiceStatus::Healthy
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceStatus::Unknown => "Unknown",
            ServiceStatus::Healthy => "Healthy",
            ServiceStatus::Unhealthy => "Unhealthy",
            ServiceStatus::Deregistered => "Deregistered",
        };
        f.write_str(name)
    }
}

/// A registered network endpoint.
///
/// `id` is assigned by the registry; callers registering a new service leave
/// it empty and use the canonical record returned by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    /// Registry-assigned identifier.
    pub id: String,
    /// Name of the owning application.
    pub application: String,
    /// Network address of the endpoint, `host:port`.
    pub address: String,
    /// Current health/lifecycle status.
    pub status: ServiceStatus,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service(id={}, application={}, address={}, status={})",
            self.id, self.application, self.address, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_variant_name() {
        let json = serde_json::to_string(&ServiceStatus::Healthy).unwrap();
        assert_eq!(json, "\"Healthy\"");

        let status: ServiceStatus = serde_json::from_str("\"Deregistered\"").unwrap();
        assert_eq!(status, ServiceStatus::Deregistered);
    }

    #[test]
    fn status_display_matches_wire_name() {
        assert_eq!(ServiceStatus::Unhealthy.to_string(), "Unhealthy");
        assert_eq!(ServiceStatus::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn status_defaults_to_unknown() {
        assert_eq!(ServiceStatus::default(), ServiceStatus::Unknown);
        assert!(!ServiceStatus::default().is_healthy());
        assert!(ServiceStatus::Healthy.is_healthy());
    }

    #[test]
    fn service_round_trips_through_json() {
        let svc = Service {
            id: "svc-1".to_string(),
            application: "turnserver".to_string(),
            address: "10.0.0.1:3478".to_string(),
            status: ServiceStatus::Healthy,
        };

        let json = serde_json::to_string(&svc).unwrap();
        let back: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(back, svc);
    }

    #[test]
    fn service_deserializes_with_missing_fields() {
        // The registry may omit fields it has no value for.
        let svc: Service = serde_json::from_str(r#"{"application":"app1"}"#).unwrap();
        assert_eq!(svc.application, "app1");
        assert_eq!(svc.id, "");
        assert_eq!(svc.status, ServiceStatus::Unknown);
    }

    #[test]
    fn service_wire_fields_are_camel_case() {
        let json = serde_json::to_value(Service::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("application"));
        assert!(obj.contains_key("address"));
        assert!(obj.contains_key("status"));
    }
}
