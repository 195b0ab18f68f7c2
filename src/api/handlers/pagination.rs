//! Pagination strip endpoint.

use axum::{
    Json,
    extract::{RawQuery, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::PAGINATION_TAG;
use crate::api::dto::{ErrorResponse, PaginationQuery, PaginationResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

/// Creates pagination routes.
pub fn pagination_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_pagination))
}

/// GET /api/pagination - Compute the control strip for one page
///
/// Query pairs other than the documented parameters are kept in every href.
#[utoipa::path(
    get,
    path = "/pagination",
    tag = PAGINATION_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Pagination strip", body = PaginationResponse),
        (status = 400, description = "Invalid pagination parameters", body = ErrorResponse)
    )
)]
pub async fn get_pagination(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PaginationQuery>,
    RawQuery(raw_query): RawQuery,
) -> AppResult<Json<PaginationResponse>> {
    let request = query.into_page_request(raw_query.as_deref());
    let rendered = state.pagination.render(request)?;
    Ok(Json(PaginationResponse::from(rendered)))
}
