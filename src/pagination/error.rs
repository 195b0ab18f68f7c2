//! Pagination contract violations

use thiserror::Error;

/// Inputs the pagination builder refuses to compute a strip for.
///
/// Every variant is a caller contract violation: the builder fails fast
/// instead of clamping the value into something that would render a
/// misleading control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("items per page must be at least 1, got {0}")]
    InvalidItemsPerPage(i64),

    #[error("current page must be at least 1, got {0}")]
    InvalidCurrentPage(i64),

    #[error("total items cannot be negative, got {0}")]
    NegativeTotalItems(i64),
}

impl PaginationError {
    /// Name of the input field the violation applies to
    pub fn field(&self) -> &'static str {
        match self {
            PaginationError::InvalidItemsPerPage(_) => "items_per_page",
            PaginationError::InvalidCurrentPage(_) => "current_page",
            PaginationError::NegativeTotalItems(_) => "total_items",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_names() {
        assert_eq!(PaginationError::InvalidItemsPerPage(0).field(), "items_per_page");
        assert_eq!(PaginationError::InvalidCurrentPage(0).field(), "current_page");
        assert_eq!(PaginationError::NegativeTotalItems(-1).field(), "total_items");
    }

    #[test]
    fn test_error_messages_include_value() {
        let error = PaginationError::NegativeTotalItems(-7);
        assert_eq!(error.to_string(), "total items cannot be negative, got -7");
    }
}
