//! Pagination types for list endpoints.
//!
//! Every list operation shares the same page arithmetic: the repository
//! supplies a total count, and [`Page::new`] derives the window metadata
//! from it. The wire format mirrors the envelope the API has always
//! produced (`docs`, `totalDocs`, `hasNextPage`, ...).

use serde::{Deserialize, Serialize};

/// Default page number when absent or unusable.
const DEFAULT_PAGE: u64 = 1;
/// Default page size. A `limit` of 0 collapses to this value.
const DEFAULT_LIMIT: u64 = 10;
/// Maximum page size.
const MAX_LIMIT: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of records per page.
    pub limit: u64,
}

impl PageRequest {
    /// Build a page request from raw query parameters.
    ///
    /// Absent or zero values fall back to the defaults (page 1, limit 10);
    /// `limit` is capped at [`MAX_LIMIT`].
    pub fn from_params(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            limit: limit
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_LIMIT)
                .min(MAX_LIMIT),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// `page` arrives uncapped from the query string, so the arithmetic
    /// saturates and the result is clamped to fit a signed bigint bind.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated result envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The records on this page.
    pub docs: Vec<T>,
    /// Total number of matching records across all pages.
    pub total_docs: u64,
    /// Number of records per page.
    pub limit: u64,
    /// Total number of pages (0 when there are no records).
    pub total_pages: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Whether a previous page exists.
    pub has_prev_page: bool,
    /// Whether a next page exists.
    pub has_next_page: bool,
    /// Previous page number, or `null` on the first page.
    pub prev_page: Option<u64>,
    /// Next page number, or `null` on the last page.
    pub next_page: Option<u64>,
}

impl<T> Page<T> {
    /// Build the envelope from a fetched window and a total count.
    ///
    /// A `page` beyond the last page yields empty `docs` with consistent
    /// metadata rather than an error.
    pub fn new(docs: Vec<T>, request: &PageRequest, total_docs: u64) -> Self {
        let PageRequest { page, limit } = *request;
        let total_pages = if total_docs == 0 {
            0
        } else {
            total_docs.div_ceil(limit)
        };
        let has_prev_page = page > 1;
        let has_next_page = page.saturating_mul(limit) < total_docs;
        Self {
            docs,
            total_docs,
            limit,
            total_pages,
            page,
            has_prev_page,
            has_next_page,
            prev_page: has_prev_page.then(|| page - 1),
            next_page: has_next_page.then(|| page + 1),
        }
    }

    /// Map the records of this page, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            docs: self.docs.into_iter().map(f).collect(),
            total_docs: self.total_docs,
            limit: self.limit,
            total_pages: self.total_pages,
            page: self.page,
            has_prev_page: self.has_prev_page,
            has_next_page: self.has_next_page,
            prev_page: self.prev_page,
            next_page: self.next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(p: u64, l: u64) -> PageRequest {
        PageRequest { page: p, limit: l }
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let env = Page::new(vec![0; 10], &page(1, 10), 25);
        assert_eq!(env.total_pages, 3);
        let env = Page::new(vec![0; 10], &page(1, 10), 30);
        assert_eq!(env.total_pages, 3);
        let env = Page::new(vec![0; 1], &page(1, 10), 1);
        assert_eq!(env.total_pages, 1);
    }

    #[test]
    fn test_window_flags() {
        let env = Page::new(vec![0; 10], &page(2, 10), 25);
        assert!(env.has_prev_page);
        assert!(env.has_next_page);
        assert_eq!(env.prev_page, Some(1));
        assert_eq!(env.next_page, Some(3));

        let env = Page::new(vec![0; 5], &page(3, 10), 25);
        assert!(env.has_prev_page);
        assert!(!env.has_next_page);
        assert_eq!(env.next_page, None);

        let env = Page::new(vec![0; 10], &page(1, 10), 25);
        assert!(!env.has_prev_page);
        assert_eq!(env.prev_page, None);
    }

    #[test]
    fn test_has_next_iff_window_short_of_total() {
        // page * limit == total: no next page
        let env = Page::new(vec![0; 10], &page(2, 10), 20);
        assert!(!env.has_next_page);
        // page * limit < total: next page
        let env = Page::new(vec![0; 10], &page(2, 10), 21);
        assert!(env.has_next_page);
    }

    #[test]
    fn test_empty_store() {
        let env: Page<u8> = Page::new(Vec::new(), &page(5, 10), 0);
        assert!(env.docs.is_empty());
        assert_eq!(env.total_pages, 0);
        assert!(!env.has_prev_page || env.page > 1);
        assert!(!env.has_next_page);
        assert_eq!(env.next_page, None);
    }

    #[test]
    fn test_page_beyond_end_keeps_metadata() {
        let env: Page<u8> = Page::new(Vec::new(), &page(9, 10), 25);
        assert!(env.docs.is_empty());
        assert_eq!(env.total_docs, 25);
        assert_eq!(env.total_pages, 3);
        assert_eq!(env.page, 9);
        assert!(env.has_prev_page);
        assert!(!env.has_next_page);
    }

    #[test]
    fn test_from_params_defaults() {
        assert_eq!(PageRequest::from_params(None, None), page(1, 10));
        // zero collapses to defaults
        assert_eq!(PageRequest::from_params(Some(0), Some(0)), page(1, 10));
        // limit capped
        assert_eq!(PageRequest::from_params(Some(2), Some(500)), page(2, 100));
    }

    #[test]
    fn test_offset() {
        assert_eq!(page(1, 10).offset(), 0);
        assert_eq!(page(3, 10).offset(), 20);
    }

    #[test]
    fn test_extreme_page_saturates() {
        // page * limit must not overflow or produce a negative bind value
        assert_eq!(page(u64::MAX, 100).offset(), i64::MAX as u64);
        assert_eq!(page(u64::MAX, u64::MAX).offset(), i64::MAX as u64);

        let env: Page<u8> = Page::new(Vec::new(), &page(u64::MAX, 100), 25);
        assert!(env.docs.is_empty());
        assert_eq!(env.total_pages, 1);
        assert!(env.has_prev_page);
        assert!(!env.has_next_page);
        assert_eq!(env.next_page, None);
    }

    #[test]
    fn test_envelope_wire_format() {
        let env = Page::new(vec![1u8], &page(1, 10), 1);
        let json = serde_json::to_value(&env).expect("serialize");
        assert_eq!(json["totalDocs"], 1);
        assert_eq!(json["hasPrevPage"], false);
        assert_eq!(json["hasNextPage"], false);
        assert!(json["prevPage"].is_null());
        assert!(json["nextPage"].is_null());
    }
}
