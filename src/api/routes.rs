//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, Method, StatusCode},
    middleware,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{
    REQUEST_ID_HEADER, error_envelope_middleware, logging_middleware, not_found_fallback,
    request_id_middleware,
};
use crate::config::ServerConfig;
use crate::state::AppState;

/// Path the generated OpenAPI document is served at
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order (outermost first)
/// 1. CORS
/// 2. Compression
/// 3. Request ID - generates/propagates request IDs
/// 4. Logging - logs requests with request IDs
/// 5. Error envelope - JSON error bodies tagged with the request ID
/// 6. Timeout - `server.request_timeout` seconds, answered with 408
///
/// # Routes
/// - `GET /api/pagination` - Pagination strip
/// - `GET /api/health`, `GET /api/health/live` - Health checks
/// - `GET /api-docs/openapi.json` - OpenAPI document
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let api_routes = OpenApiRouter::new()
        .merge(handlers::pagination::pagination_routes())
        .merge(handlers::health::health_routes());

    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", api_routes)
        .split_for_parts();

    let openapi = Arc::new(openapi);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    router
        .route(
            OPENAPI_PATH,
            get(move || {
                let openapi = Arc::clone(&openapi);
                async move { Json(openapi.as_ref().clone()) }
            }),
        )
        .fallback(not_found_fallback)
        // Last added runs first
        .layer(timeout_layer(Duration::from_secs(server.request_timeout)))
        .layer(middleware::from_fn(error_envelope_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Timed-out requests answer 408 so the envelope reports `REQUEST_TIMEOUT`
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
