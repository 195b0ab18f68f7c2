//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `error` - Common error response DTOs
//! - `health` - Health check DTOs
//! - `pagination` - Pagination request/response DTOs

mod error;
mod health;
mod pagination;

pub use error::ErrorResponse;
pub use health::{HealthResponse, HealthStatus};
pub use pagination::{
    ControlKind, PageControlResponse, PaginationQuery, PaginationResponse, RESERVED_QUERY_KEYS,
    passthrough_pairs,
};
