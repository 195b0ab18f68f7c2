//! Error response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "code": "VALIDATION_ERROR",
    "message": "Current page must be at least 1, got 0",
    "details": { "field": "current_page" },
    "request_id": "4f6c8a52-1f0e-4a8e-9a55-0b1c2d3e4f50"
}))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Structured context, e.g. the offending field
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
    /// Correlates with the `x-request-id` response header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_omitted() {
        let value = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "Missing")).unwrap();
        assert_eq!(value, json!({ "code": "NOT_FOUND", "message": "Missing" }));
    }

    #[test]
    fn test_builder_sets_details_and_request_id() {
        let response = ErrorResponse::new("VALIDATION_ERROR", "Bad page")
            .with_details(json!({ "field": "page" }))
            .with_request_id("abc-123");

        assert_eq!(response.details, Some(json!({ "field": "page" })));
        assert_eq!(response.request_id.as_deref(), Some("abc-123"));
    }
}
