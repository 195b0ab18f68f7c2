use utoipa::OpenApi;

pub const PAGINATION_TAG: &str = "Pagination";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "grants-pager",
        description = "Pagination controls for long listings",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = PAGINATION_TAG, description = "Pagination strip computation"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
