//! Pagination DTOs for `GET /api/pagination`.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::pagination::{PageDescriptor, PageLink};
use crate::services::{PageRequest, RenderedPage};

/// Query keys consumed by the endpoint itself; every other pair is
/// carried into the generated hrefs.
pub const RESERVED_QUERY_KEYS: &[&str] = &["page", "page_size", "total_items", "item_type", "path"];

/// Query parameters for the pagination endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Current page (1-based, defaults to 1)
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 5)]
    pub page: Option<i64>,

    /// Items per page (defaults to the configured page size)
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    #[param(minimum = 1, example = 10)]
    pub page_size: Option<i64>,

    /// Total number of items in the listing
    #[validate(range(min = 0, message = "Total items cannot be negative"))]
    #[param(minimum = 0, example = 100)]
    pub total_items: i64,

    /// Noun used in the summary sentence
    #[validate(length(min = 1, max = 64, message = "Item type must be 1 to 64 characters"))]
    #[param(example = "applications")]
    pub item_type: Option<String>,

    /// Listing route the hrefs point at
    #[param(example = "/grants")]
    pub path: Option<String>,
}

impl PaginationQuery {
    /// Combine with the raw query string, keeping non-reserved pairs in order
    pub fn into_page_request(self, raw_query: Option<&str>) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            item_type: self.item_type,
            path: self.path,
            query: passthrough_pairs(raw_query),
        }
    }
}

/// Decode `raw_query` and drop the keys the endpoint consumes
pub fn passthrough_pairs(raw_query: Option<&str>) -> Vec<(String, String)> {
    raw_query
        .map(|raw| {
            form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .filter(|(key, _)| !RESERVED_QUERY_KEYS.contains(&key.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

/// Kind of a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Previous,
    Next,
    Numeric,
    Active,
    Ellipsis,
}

/// One entry of the control strip.
///
/// Only the fields relevant to `type` are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "type": "numeric",
    "page": 4,
    "label": "4",
    "accessible_label": "Page 4",
    "href": "/grants?page=4"
}))]
pub struct PageControlResponse {
    #[serde(rename = "type")]
    pub kind: ControlKind,
    /// Page shown by numeric and active controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Destination of previous and next controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_page: Option<u64>,
    /// First page hidden behind an ellipsis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_range_start: Option<u64>,
    /// Last page hidden behind an ellipsis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_range_end: Option<u64>,
    /// Visible text
    pub label: String,
    /// Screen-reader text
    pub accessible_label: String,
    /// Absent for the active page and ellipses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl From<&PageLink> for PageControlResponse {
    fn from(link: &PageLink) -> Self {
        let mut response = Self {
            kind: ControlKind::Numeric,
            page: None,
            target_page: None,
            skipped_range_start: None,
            skipped_range_end: None,
            label: link.label.clone(),
            accessible_label: link.accessible_label.clone(),
            href: link.href.clone(),
        };

        match link.descriptor {
            PageDescriptor::Previous { target_page } => {
                response.kind = ControlKind::Previous;
                response.target_page = Some(target_page);
            }
            PageDescriptor::Next { target_page } => {
                response.kind = ControlKind::Next;
                response.target_page = Some(target_page);
            }
            PageDescriptor::Numeric { page } => {
                response.page = Some(page);
            }
            PageDescriptor::Active { page } => {
                response.kind = ControlKind::Active;
                response.page = Some(page);
            }
            PageDescriptor::Ellipsis {
                skipped_range_start,
                skipped_range_end,
            } => {
                response.kind = ControlKind::Ellipsis;
                response.skipped_range_start = Some(skipped_range_start);
                response.skipped_range_end = Some(skipped_range_end);
            }
        }

        response
    }
}

/// Body of `GET /api/pagination`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationResponse {
    /// First item number shown on the page
    #[schema(example = 41)]
    pub range_start: u64,
    /// Last item number shown on the page
    #[schema(example = 50)]
    pub range_end: u64,
    #[schema(example = 100)]
    pub total_items: u64,
    #[schema(example = 10)]
    pub total_pages: u64,
    #[schema(example = "Showing 41 to 50 of 100 items")]
    pub summary: String,
    /// Ordered control strip; empty when everything fits on one page
    pub controls: Vec<PageControlResponse>,
}

impl From<RenderedPage> for PaginationResponse {
    fn from(rendered: RenderedPage) -> Self {
        let RenderedPage { result, links } = rendered;
        Self {
            range_start: result.range_start,
            range_end: result.range_end,
            total_items: result.total_items,
            total_pages: result.total_pages,
            summary: result.summary,
            controls: links.iter().map(PageControlResponse::from).collect(),
        }
    }
}
