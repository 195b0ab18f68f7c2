//! Health check DTOs for API responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "name": "grants-pager",
    "version": "0.1.0",
    "timestamp": "2026-01-01T12:00:00Z"
}))]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Time of the check (RFC 3339)
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
}

/// Health status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All systems operational
    Healthy,
    /// The pagination self-check failed
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(serde_json::to_string(&HealthStatus::Healthy).unwrap(), "\"healthy\"");
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[test]
    fn test_health_response_round_trip() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            name: "grants-pager".to_string(),
            version: "0.1.0".to_string(),
            timestamp: "2026-01-01T12:00:00Z".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        let parsed: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
