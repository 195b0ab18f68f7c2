//! Application state for Axum web framework.
//!
//! Everything here is immutable after startup and shared behind `Arc`.

use std::sync::Arc;

use crate::config::{ApplicationConfig, Settings};
use crate::services::PaginationService;

/// Application state shared by all request handlers.
///
/// Cloning is cheap since every field is reference counted.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Pagination defaults, limits and computation
    pub pagination: PaginationService,
    /// Application name and version reported by health checks
    pub application: Arc<ApplicationConfig>,
}

impl AppState {
    /// Creates the state from loaded settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            pagination: PaginationService::new(Arc::new(settings.pagination.clone())),
            application: Arc::new(settings.application.clone()),
        }
    }
}
