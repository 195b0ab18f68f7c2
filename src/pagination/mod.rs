//! Pagination window builder
//!
//! Pure, synchronous computation of the pagination strip shown under a
//! listing:
//! - the "Showing X to Y of Z items" range
//! - the neighbor window with anchors and ellipsis markers
//! - the ordered control descriptors (Previous, pages, Next)
//!
//! Link assembly lives in [`links`]; descriptors themselves only carry page
//! numbers.

mod controls;
mod error;
pub mod links;
mod params;
mod range;
mod window;

pub use controls::{PageDescriptor, PaginationResult, build_controls, paginate, summary_sentence};
pub use error::PaginationError;
pub use links::{DEFAULT_PAGE_QUERY_KEY, PageLink, PageLinkBuilder, is_local_route, link_controls};
pub use params::{DEFAULT_ITEM_TYPE_LABEL, PaginationParameters};
pub use range::{PageRange, compute_range, total_pages};
pub use window::{EDGE_RADIUS, INNER_RADIUS, WindowEntry, compute_neighbor_window, neighbor_radius};
