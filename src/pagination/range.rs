use serde::Serialize;

use super::error::PaginationError;

/// First and last item number shown on a page, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
}

/// Number of pages needed for `total_items`, 0 when there are no items.
pub fn total_pages(total_items: u64, items_per_page: u64) -> Result<u64, PaginationError> {
    if items_per_page == 0 {
        return Err(PaginationError::InvalidItemsPerPage(0));
    }
    Ok(total_items.div_ceil(items_per_page))
}

/// Compute the "showing X to Y" item range for the current page.
///
/// The last page ends at `total_items`; every other page ends at a full
/// page boundary. A `current_page` past the last page is not clamped.
pub fn compute_range(
    current_page: u64,
    items_per_page: u64,
    total_items: u64,
) -> Result<PageRange, PaginationError> {
    if current_page == 0 {
        return Err(PaginationError::InvalidCurrentPage(0));
    }
    let total_pages = total_pages(total_items, items_per_page)?;

    let start = if current_page == 1 {
        1
    } else {
        (current_page - 1)
            .saturating_mul(items_per_page)
            .saturating_add(1)
    };

    let end = if current_page == total_pages {
        total_items
    } else {
        current_page.saturating_mul(items_per_page)
    };

    Ok(PageRange { start, end })
}
