use super::error::PaginationError;
use super::range::total_pages;

/// Label used in the summary sentence when the caller does not name its items
pub const DEFAULT_ITEM_TYPE_LABEL: &str = "items";

/// Validated input of a single pagination computation.
///
/// Construction is the only place contract violations are detected; once a
/// value exists every field is in domain. A `current_page` beyond the last
/// page is accepted on purpose, the strip simply marks nothing active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParameters {
    current_page: u64,
    items_per_page: u64,
    total_items: u64,
    item_type_label: String,
}

impl PaginationParameters {
    /// Validate raw caller input.
    ///
    /// # Errors
    /// - `InvalidItemsPerPage` when `items_per_page <= 0`
    /// - `NegativeTotalItems` when `total_items < 0`
    /// - `InvalidCurrentPage` when `current_page < 1`
    pub fn new(
        current_page: i64,
        items_per_page: i64,
        total_items: i64,
    ) -> Result<Self, PaginationError> {
        if items_per_page <= 0 {
            return Err(PaginationError::InvalidItemsPerPage(items_per_page));
        }
        if total_items < 0 {
            return Err(PaginationError::NegativeTotalItems(total_items));
        }
        if current_page < 1 {
            return Err(PaginationError::InvalidCurrentPage(current_page));
        }

        Ok(Self {
            current_page: current_page as u64,
            items_per_page: items_per_page as u64,
            total_items: total_items as u64,
            item_type_label: DEFAULT_ITEM_TYPE_LABEL.to_string(),
        })
    }

    /// Replace the noun used in the summary sentence
    pub fn with_item_type_label(mut self, label: impl Into<String>) -> Self {
        self.item_type_label = label.into();
        self
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn item_type_label(&self) -> &str {
        &self.item_type_label
    }

    /// Number of pages needed to show every item, 0 for an empty listing
    pub fn total_pages(&self) -> u64 {
        // items_per_page >= 1 is guaranteed by construction
        total_pages(self.total_items, self.items_per_page).unwrap_or(0)
    }

    /// Whether the requested page lies past the last page
    pub fn is_out_of_range(&self) -> bool {
        let total_pages = self.total_pages();
        total_pages > 0 && self.current_page > total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_parameters() {
        let params = PaginationParameters::new(3, 10, 95).unwrap();
        assert_eq!(params.current_page(), 3);
        assert_eq!(params.items_per_page(), 10);
        assert_eq!(params.total_items(), 95);
        assert_eq!(params.item_type_label(), "items");
        assert_eq!(params.total_pages(), 10);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert_eq!(
            PaginationParameters::new(1, 0, 10),
            Err(PaginationError::InvalidItemsPerPage(0))
        );
    }

    #[test]
    fn test_rejects_negative_page_size() {
        assert_eq!(
            PaginationParameters::new(1, -5, 10),
            Err(PaginationError::InvalidItemsPerPage(-5))
        );
    }

    #[test]
    fn test_rejects_negative_total() {
        assert_eq!(
            PaginationParameters::new(1, 10, -1),
            Err(PaginationError::NegativeTotalItems(-1))
        );
    }

    #[test]
    fn test_rejects_page_zero() {
        assert_eq!(
            PaginationParameters::new(0, 10, 10),
            Err(PaginationError::InvalidCurrentPage(0))
        );
    }

    #[test]
    fn test_empty_listing_has_no_pages() {
        let params = PaginationParameters::new(1, 10, 0).unwrap();
        assert_eq!(params.total_pages(), 0);
        assert!(!params.is_out_of_range());
    }

    #[test]
    fn test_out_of_range_is_accepted() {
        let params = PaginationParameters::new(999, 10, 30).unwrap();
        assert_eq!(params.total_pages(), 3);
        assert!(params.is_out_of_range());
    }

    #[test]
    fn test_with_item_type_label() {
        let params = PaginationParameters::new(1, 10, 30)
            .unwrap()
            .with_item_type_label("applications");
        assert_eq!(params.item_type_label(), "applications");
    }
}
