use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, AppResult};

/// Rows per page in the stock table
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Value Object - current page index and page size (always > 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPagination")]
pub struct PaginationState {
    page_current: usize,
    page_size: usize,
}

#[derive(Deserialize)]
struct RawPagination {
    page_current: usize,
    page_size: usize,
}

impl TryFrom<RawPagination> for PaginationState {
    type Error = AppError;

    fn try_from(raw: RawPagination) -> Result<Self, Self::Error> {
        PaginationState::new(raw.page_current, raw.page_size)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self { page_current: 0, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl PaginationState {
    pub fn new(page_current: usize, page_size: usize) -> AppResult<Self> {
        if page_size == 0 {
            return Err(AppError::ValidationError("Page size must be greater than zero".to_string()));
        }
        Ok(Self { page_current, page_size })
    }

    pub fn first_page(page_size: usize) -> AppResult<Self> {
        Self::new(0, page_size)
    }

    pub fn page_current(&self) -> usize {
        self.page_current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Half-open row range `[start, end)`; saturates instead of overflowing.
    pub fn row_range(&self) -> (usize, usize) {
        let start = self.page_current.saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }

    pub fn next(&self) -> Self {
        Self { page_current: self.page_current.saturating_add(1), ..*self }
    }

    pub fn previous(&self) -> Self {
        Self { page_current: self.page_current.saturating_sub(1), ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(PaginationState::new(0, 0).is_err());
        assert!(serde_json::from_str::<PaginationState>(r#"{"page_current":1,"page_size":0}"#).is_err());
    }

    #[test]
    fn row_range_saturates() {
        let state = PaginationState::new(usize::MAX, 5).unwrap();
        let (start, end) = state.row_range();
        assert_eq!(start, usize::MAX);
        assert_eq!(end, usize::MAX);
        assert_eq!(PaginationState::new(2, 5).unwrap().row_range(), (10, 15));
    }

    #[test]
    fn previous_stops_at_first_page() {
        let state = PaginationState::default();
        assert_eq!(state.previous().page_current(), 0);
        assert_eq!(state.next().next().previous().page_current(), 1);
    }
}
