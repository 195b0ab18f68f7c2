use serde::{Deserialize, Serialize};

use super::error::PaginationError;
use super::params::PaginationParameters;
use super::range::compute_range;
use super::window::{WindowEntry, compute_neighbor_window};

/// One entry of the rendered control strip.
///
/// Descriptors carry target page numbers only; turning a page into a URL is
/// the job of [`PageLinkBuilder`](super::PageLinkBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageDescriptor {
    Previous {
        target_page: u64,
    },
    Next {
        target_page: u64,
    },
    Numeric {
        page: u64,
    },
    /// The current page, rendered without a link
    Active {
        page: u64,
    },
    Ellipsis {
        skipped_range_start: u64,
        skipped_range_end: u64,
    },
}

impl PageDescriptor {
    /// Page a click on this control navigates to
    pub fn target_page(&self) -> Option<u64> {
        match self {
            PageDescriptor::Previous { target_page } | PageDescriptor::Next { target_page } => {
                Some(*target_page)
            }
            PageDescriptor::Numeric { page } => Some(*page),
            PageDescriptor::Active { .. } | PageDescriptor::Ellipsis { .. } => None,
        }
    }

    /// Visible text of the control
    pub fn label(&self) -> String {
        match self {
            PageDescriptor::Previous { .. } => "Previous".to_string(),
            PageDescriptor::Next { .. } => "Next".to_string(),
            PageDescriptor::Numeric { page } | PageDescriptor::Active { page } => page.to_string(),
            PageDescriptor::Ellipsis { .. } => "...".to_string(),
        }
    }

    /// Text announced by screen readers
    pub fn accessible_label(&self) -> String {
        match self {
            PageDescriptor::Previous { target_page } => format!("Previous page, page {target_page}"),
            PageDescriptor::Next { target_page } => format!("Next page, page {target_page}"),
            PageDescriptor::Numeric { page } => format!("Page {page}"),
            PageDescriptor::Active { page } => format!("Current page, page {page}"),
            PageDescriptor::Ellipsis {
                skipped_range_start,
                skipped_range_end,
            } => format!("Skipping pages {skipped_range_start} to {skipped_range_end}"),
        }
    }
}

/// Output of a full pagination computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationResult {
    pub controls: Vec<PageDescriptor>,
    pub range_start: u64,
    pub range_end: u64,
    pub total_items: u64,
    pub total_pages: u64,
    /// "Showing X to Y of Z <label>"
    pub summary: String,
}

/// Turn a neighbor window into the ordered control strip.
///
/// A listing with a single page (or none) gets no controls at all.
pub fn build_controls(
    current_page: u64,
    total_pages: u64,
    window: &[WindowEntry],
) -> Vec<PageDescriptor> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(window.len() + 2);

    if current_page > 1 {
        controls.push(PageDescriptor::Previous {
            target_page: current_page - 1,
        });
    }

    controls.extend(window.iter().map(|entry| match *entry {
        WindowEntry::Page(page) if page == current_page => PageDescriptor::Active { page },
        WindowEntry::Page(page) => PageDescriptor::Numeric { page },
        WindowEntry::Ellipsis {
            skipped_range_start,
            skipped_range_end,
        } => PageDescriptor::Ellipsis {
            skipped_range_start,
            skipped_range_end,
        },
    }));

    if current_page < total_pages {
        controls.push(PageDescriptor::Next {
            target_page: current_page + 1,
        });
    }

    controls
}

/// Summary sentence shown above the control strip
pub fn summary_sentence(range_start: u64, range_end: u64, total_items: u64, label: &str) -> String {
    format!("Showing {range_start} to {range_end} of {total_items} {label}")
}

/// Compute range, window and controls for one request.
pub fn paginate(params: &PaginationParameters) -> Result<PaginationResult, PaginationError> {
    let current_page = params.current_page();
    let total_pages = params.total_pages();

    let range = compute_range(current_page, params.items_per_page(), params.total_items())?;
    let window = compute_neighbor_window(current_page, total_pages)?;
    let controls = build_controls(current_page, total_pages, &window);

    Ok(PaginationResult {
        controls,
        range_start: range.start,
        range_end: range.end,
        total_items: params.total_items(),
        total_pages,
        summary: summary_sentence(
            range.start,
            range.end,
            params.total_items(),
            params.item_type_label(),
        ),
    })
}
