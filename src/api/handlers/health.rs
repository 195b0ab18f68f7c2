//! Health check endpoint handlers.
//!
//! The full check runs a fixed pagination computation through the same
//! service the API uses; the liveness probe only proves the process answers.

use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{HealthResponse, HealthStatus};
use crate::services::PageRequest;
use crate::state::AppState;

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Self-check
/// - `GET /health/live` - Liveness probe
pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health_check))
        .routes(routes!(liveness_check))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let status = match self_check(&state) {
        Ok(()) => HealthStatus::Healthy,
        Err(reason) => {
            tracing::warn!(%reason, "Pagination self-check failed");
            HealthStatus::Unhealthy
        }
    };

    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(health_response(&state, status)))
}

#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn liveness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health_response(&state, HealthStatus::Healthy))
}

fn health_response(state: &AppState, status: HealthStatus) -> HealthResponse {
    HealthResponse {
        status,
        name: state.application.name.clone(),
        version: state.application.version.clone(),
        timestamp: jiff::Timestamp::now().to_string(),
    }
}

/// Page 5 of 100 items must produce the nine-control strip
fn self_check(state: &AppState) -> Result<(), String> {
    let page_size = state.pagination.max_page_size().min(10);
    let rendered = state
        .pagination
        .render(PageRequest {
            page: Some(5),
            page_size: Some(page_size),
            total_items: page_size.saturating_mul(10),
            ..Default::default()
        })
        .map_err(|e| e.to_string())?;

    if rendered.links.len() == 9 {
        Ok(())
    } else {
        Err(format!("expected 9 controls, got {}", rendered.links.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    async fn test_health_check_healthy_with_defaults() {
        let state = AppState::new(&Settings::default());
        let (code, Json(body)) = health_check(State(state)).await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, HealthStatus::Healthy);
        assert_eq!(body.name, "grants-pager");
        assert!(body.timestamp.parse::<jiff::Timestamp>().is_ok());
    }

    #[tokio::test]
    async fn test_liveness_check() {
        let state = AppState::new(&Settings::default());
        let Json(body) = liveness_check(State(state)).await;
        assert_eq!(body.status, HealthStatus::Healthy);
    }

    #[test]
    fn test_self_check_with_small_max_page_size() {
        let mut settings = Settings::default();
        settings.pagination.default_items_per_page = 3;
        settings.pagination.max_items_per_page = 3;
        assert!(self_check(&AppState::new(&settings)).is_ok());
    }
}
