use std::collections::BTreeSet;

use super::error::PaginationError;

/// Radius used when the current page sits on the first or last page
pub const EDGE_RADIUS: u64 = 2;

/// Radius used everywhere else
pub const INNER_RADIUS: u64 = 1;

/// One element of the neighbor window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEntry {
    Page(u64),
    /// Hidden pages, inclusive on both ends
    Ellipsis {
        skipped_range_start: u64,
        skipped_range_end: u64,
    },
}

impl WindowEntry {
    pub fn page(&self) -> Option<u64> {
        match self {
            WindowEntry::Page(page) => Some(*page),
            WindowEntry::Ellipsis { .. } => None,
        }
    }
}

/// Half-width of the window around `current_page`.
///
/// Widened at either edge so the strip keeps roughly the same length when
/// the current page is an anchor.
pub fn neighbor_radius(current_page: u64, total_pages: u64) -> u64 {
    if current_page == 1 || current_page == total_pages {
        EDGE_RADIUS
    } else {
        INNER_RADIUS
    }
}

/// Compute the ascending sequence of shown pages and ellipsis markers.
///
/// Page 1 and `total_pages` are always kept, plus every page within the
/// radius of `current_page`. Between two kept pages a single hidden page is
/// shown as a number, and two or more hidden pages collapse into one
/// ellipsis.
pub fn compute_neighbor_window(
    current_page: u64,
    total_pages: u64,
) -> Result<Vec<WindowEntry>, PaginationError> {
    if current_page == 0 {
        return Err(PaginationError::InvalidCurrentPage(0));
    }
    if total_pages == 0 {
        return Ok(Vec::new());
    }

    let radius = neighbor_radius(current_page, total_pages);
    let left = current_page.saturating_sub(radius).max(1);
    let right = current_page.saturating_add(radius).min(total_pages);

    let mut kept = BTreeSet::from([1, total_pages]);
    kept.extend(left..=right);

    let mut window = Vec::with_capacity(kept.len() + 2);
    let mut previous: Option<u64> = None;

    for page in kept {
        if let Some(prev) = previous {
            match page - prev {
                2 => window.push(WindowEntry::Page(prev + 1)),
                gap if gap > 2 => window.push(WindowEntry::Ellipsis {
                    skipped_range_start: prev + 1,
                    skipped_range_end: page - 1,
                }),
                _ => {}
            }
        }
        window.push(WindowEntry::Page(page));
        previous = Some(page);
    }

    Ok(window)
}
