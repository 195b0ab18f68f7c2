//! Error handler for converting AppError to HTTP responses.
//!
//! Implements `IntoResponse` for `AppError` and a middleware that gives
//! every error response the same JSON envelope, tagged with the request ID.

use axum::{
    Json,
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderValue, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::RequestId;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Error bodies larger than this are replaced by the default envelope for their status
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(error_to_response(&self))).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::Validation { .. } | AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Builds the JSON body for an error. Internal details never leave the process.
pub fn error_to_response(error: &AppError) -> ErrorResponse {
    let code = error_to_code(error);
    match error {
        AppError::Validation { field, reason } => {
            ErrorResponse::new(code, reason).with_details(json!({ "field": field }))
        }
        AppError::ValidationErrors { errors } => {
            ErrorResponse::new(code, "Request validation failed")
                .with_details(json!({ "errors": errors }))
        }
        AppError::BadRequest { message } => ErrorResponse::new(code, message),
        AppError::NotFound { resource } => {
            ErrorResponse::new(code, &format!("Resource not found: {}", resource))
        }
        AppError::Configuration { key, .. } => {
            ErrorResponse::new(code, "Server configuration error")
                .with_details(json!({ "key": key }))
        }
        AppError::Internal { .. } => ErrorResponse::new(code, "An internal error occurred"),
    }
}

/// Router fallback for unknown routes
pub async fn not_found_fallback(uri: Uri) -> AppError {
    AppError::NotFound {
        resource: uri.path().to_string(),
    }
}

/// Middleware that normalizes every 4xx/5xx response.
///
/// JSON error bodies get the request ID attached; plain-text or empty
/// bodies produced by axum or tower layers (405, 408, ...) are rewrapped
/// as [`ErrorResponse`]. A body that cannot be read within
/// `MAX_ERROR_BODY_BYTES` gets the default message for its status.
/// Must run inside [`super::request_id_middleware`].
pub async fn error_envelope_middleware(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().cloned();
    let response = next.run(request).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return (status, Json(status_to_response(status, "", request_id.as_ref())))
                .into_response();
        }
    };

    let error_response = if is_json {
        match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(mut parsed) => {
                if parsed.request_id.is_none() {
                    parsed.request_id = request_id.map(|id| id.0);
                }
                parsed
            }
            Err(_) => return Response::from_parts(parts, Body::from(bytes)),
        }
    } else {
        let original_message = String::from_utf8_lossy(&bytes).trim().to_string();
        status_to_response(status, &original_message, request_id.as_ref())
    };

    let body = match serde_json::to_vec(&error_response) {
        Ok(body) => body,
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    };

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Response::from_parts(parts, Body::from(Bytes::from(body)))
}

/// Default envelope for a bare status code
fn status_to_response(
    status: StatusCode,
    original_message: &str,
    request_id: Option<&RequestId>,
) -> ErrorResponse {
    let (code, default_message) = match status {
        StatusCode::BAD_REQUEST => ("BAD_REQUEST", "Bad request - invalid or malformed request"),
        StatusCode::NOT_FOUND => ("NOT_FOUND", "The requested resource was not found"),
        StatusCode::METHOD_NOT_ALLOWED => (
            "METHOD_NOT_ALLOWED",
            "HTTP method not allowed for this endpoint",
        ),
        StatusCode::REQUEST_TIMEOUT => ("REQUEST_TIMEOUT", "Request timeout"),
        StatusCode::PAYLOAD_TOO_LARGE => ("PAYLOAD_TOO_LARGE", "Request payload too large"),
        StatusCode::SERVICE_UNAVAILABLE => {
            ("SERVICE_UNAVAILABLE", "Service temporarily unavailable")
        }
        s if s.is_server_error() => ("INTERNAL_ERROR", "An internal server error occurred"),
        _ => ("UNKNOWN_ERROR", "An unknown error occurred"),
    };

    let message = if original_message.is_empty() || status.is_server_error() {
        default_message
    } else {
        original_message
    };

    let response = ErrorResponse::new(code, message);
    match request_id {
        Some(id) => response.with_request_id(id.as_str()),
        None => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt;

    async fn call(app: Router) -> (StatusCode, ErrorResponse) {
        let response = app
            .oneshot(axum::http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_oversized_body_gets_default_envelope() {
        let app = Router::new()
            .route(
                "/",
                get(|| async {
                    (StatusCode::BAD_GATEWAY, "x".repeat(MAX_ERROR_BODY_BYTES + 1))
                }),
            )
            .layer(middleware::from_fn(error_envelope_middleware));

        let (status, body) = call(app).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert_eq!(body.message, "An internal server error occurred");
    }

    #[tokio::test]
    async fn test_plain_text_body_is_rewrapped() {
        let app = Router::new()
            .route("/", get(|| async { (StatusCode::BAD_REQUEST, "missing total_items") }))
            .layer(middleware::from_fn(error_envelope_middleware));

        let (status, body) = call(app).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "BAD_REQUEST");
        assert_eq!(body.message, "missing total_items");
    }

    #[test]
    fn test_status_codes() {
        let validation = AppError::Validation {
            field: "page".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(error_to_status_code(&validation), StatusCode::BAD_REQUEST);

        let not_found = AppError::NotFound {
            resource: "/nope".to_string(),
        };
        assert_eq!(error_to_status_code(&not_found), StatusCode::NOT_FOUND);

        let internal = AppError::Internal {
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(error_to_status_code(&internal), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_errors_body() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "total_items".to_string(),
                message: "Total items cannot be negative".to_string(),
            }],
        };
        let body = serde_json::to_value(error_to_response(&error)).unwrap();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["errors"][0]["field"], "total_items");
    }

    #[test]
    fn test_internal_error_is_sanitized() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("secret detail"),
        };
        let body = error_to_response(&error);
        assert!(!body.message.contains("secret"));
        assert!(body.details.is_none());
    }

    #[test]
    fn test_status_to_response_keeps_client_message() {
        let id = RequestId("req-1".to_string());
        let response = status_to_response(StatusCode::METHOD_NOT_ALLOWED, "", Some(&id));
        assert_eq!(response.code, "METHOD_NOT_ALLOWED");
        assert_eq!(response.request_id.as_deref(), Some("req-1"));

        let response = status_to_response(StatusCode::BAD_REQUEST, "missing field", None);
        assert_eq!(response.message, "missing field");

        let response = status_to_response(StatusCode::BAD_GATEWAY, "upstream said no", None);
        assert_eq!(response.code, "INTERNAL_ERROR");
        assert_eq!(response.message, "An internal server error occurred");
    }
}
