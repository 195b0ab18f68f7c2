//! Pagination service shared by the HTTP API and the `render` command.
//!
//! Applies the configured defaults and limits to a raw request before
//! handing it to the pure pagination core.

use std::sync::Arc;

use crate::config::PaginationConfig;
use crate::error::{AppError, AppResult};
use crate::pagination::{
    PageLink, PageLinkBuilder, PaginationParameters, PaginationResult, is_local_route,
    link_controls, paginate,
};

/// A pagination request before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page; defaults to 1
    pub page: Option<i64>,
    /// Defaults to `pagination.default_items_per_page`
    pub page_size: Option<i64>,
    pub total_items: i64,
    /// Defaults to `pagination.default_item_type_label`
    pub item_type: Option<String>,
    /// Listing route, optionally with a query string such as
    /// `/grants?status=open`; defaults to `pagination.base_path`
    pub path: Option<String>,
    /// Query pairs carried into every href
    pub query: Vec<(String, String)>,
}

/// Computed strip together with its renderable links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub result: PaginationResult,
    pub links: Vec<PageLink>,
}

/// Pagination service.
///
/// Holds only the immutable pagination settings, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct PaginationService {
    config: Arc<PaginationConfig>,
}

impl PaginationService {
    pub fn new(config: Arc<PaginationConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Largest page size a caller may request
    pub fn max_page_size(&self) -> i64 {
        i64::try_from(self.config.max_items_per_page).unwrap_or(i64::MAX)
    }

    /// Compute the control strip and hrefs for one request.
    ///
    /// # Errors
    /// - `Validation` on `page_size` when it exceeds the configured maximum
    /// - `Validation` on `path` when it is not an absolute route
    /// - `Validation` for any contract violation reported by the core
    pub fn render(&self, request: PageRequest) -> AppResult<RenderedPage> {
        let page = request.page.unwrap_or(1);
        let page_size = request.page_size.unwrap_or_else(|| {
            i64::try_from(self.config.default_items_per_page).unwrap_or(i64::MAX)
        });

        if page_size > self.max_page_size() {
            return Err(AppError::Validation {
                field: "page_size".to_string(),
                reason: format!(
                    "Page size {} exceeds the maximum of {}",
                    page_size, self.config.max_items_per_page
                ),
            });
        }

        let label = request
            .item_type
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| self.config.default_item_type_label.clone());

        let params =
            PaginationParameters::new(page, page_size, request.total_items)?.with_item_type_label(label);

        if params.is_out_of_range() {
            tracing::debug!(
                current_page = params.current_page(),
                total_pages = params.total_pages(),
                "Current page is beyond the last page"
            );
        }

        let result = paginate(&params)?;

        let builder = match request.path.filter(|path| !path.is_empty()) {
            Some(target) if !is_local_route(&target) => {
                return Err(AppError::Validation {
                    field: "path".to_string(),
                    reason: format!("Path must be a local route starting with a single '/', got '{}'", target),
                });
            }
            Some(target) => PageLinkBuilder::from_target(&target),
            None => PageLinkBuilder::new(self.config.base_path.as_str()),
        };
        let builder = builder
            .with_query(request.query)
            .with_page_key(self.config.page_query_key.as_str());
        let links = link_controls(&result.controls, &builder);

        tracing::debug!(
            current_page = params.current_page(),
            total_pages = result.total_pages,
            controls = links.len(),
            "Pagination computed"
        );

        Ok(RenderedPage { result, links })
    }
}
