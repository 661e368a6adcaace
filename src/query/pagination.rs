//! Page/limit handling shared by every listing query.

use crate::error::{CatalogError, Result};

/// Page used when the caller gives none.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the caller gives none.
pub const DEFAULT_LIMIT: u64 = 10;

/// A validated 1-based page number and page size.
///
/// No upper bound is placed on `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    /// Builds a pagination from optional query parameters.
    ///
    /// Missing values fall back to the defaults; zero is rejected.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err(CatalogError::Validation("page must be at least 1".to_string()));
        }
        if limit == 0 {
            return Err(CatalogError::Validation("limit must be at least 1".to_string()));
        }

        Ok(Self { page, limit })
    }

    /// Number of items before this page.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Takes this page out of an already ordered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(limit).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Pagination::new(None, None).unwrap();
        assert_eq!(p, Pagination::default());
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
        assert_eq!(p.skip(), 0);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(
            Pagination::new(Some(0), None),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            Pagination::new(None, Some(0)),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_apply_slices_pages() {
        let items: Vec<u32> = (0..25).collect();
        let third = Pagination::new(Some(3), Some(10)).unwrap();
        assert_eq!(third.apply(items.iter().copied()), (20..25).collect::<Vec<_>>());

        let beyond = Pagination::new(Some(9), Some(10)).unwrap();
        assert!(beyond.apply(items.iter()).is_empty());
    }

    #[test]
    fn test_huge_limit_returns_remaining_set() {
        let items: Vec<u32> = (0..5).collect();
        let p = Pagination::new(Some(1), Some(u64::MAX)).unwrap();
        assert_eq!(p.apply(items.clone()), items);

        let far = Pagination::new(Some(u64::MAX), Some(u64::MAX)).unwrap();
        assert!(far.apply(items).is_empty());
    }

    #[test]
    fn test_skipped_items_are_not_cloned() {
        use std::cell::Cell;

        struct Counted<'a>(&'a Cell<usize>);
        impl Clone for Counted<'_> {
            fn clone(&self) -> Self {
                self.0.set(self.0.get() + 1);
                Counted(self.0)
            }
        }

        let clones = Cell::new(0);
        let items: Vec<Counted> = (0..25).map(|_| Counted(&clones)).collect();
        let third = Pagination::new(Some(3), Some(10)).unwrap();

        let page: Vec<Counted> = third.apply(items.iter()).into_iter().cloned().collect();
        assert_eq!(page.len(), 5);
        assert_eq!(clones.get(), 5);
    }

}
