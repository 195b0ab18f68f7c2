//! Service layer for business logic operations.
//!
//! Services apply configuration to requests and coordinate the pure
//! pagination core for the handlers and CLI commands.

mod pagination_service;

pub use pagination_service::{PageRequest, PaginationService, RenderedPage};
