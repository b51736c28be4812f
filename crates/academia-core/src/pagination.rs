//! Page-based pagination for list endpoints.
//!
//! List endpoints accept `page` (1-indexed, default 1) and `limit`
//! (clamped to [1, 100], default 10) and answer with
//! `{ "data": [...], "meta": PaginationMeta }`.
//!
//! ```ignore
//! let params = filters.pagination();
//! let rows = fetch(params.limit(), params.offset()).await?;
//! let meta = PaginationMeta::new(total, &params);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::serde::deserialize_optional_i64;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Metadata about a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: i64,
    /// Items per page (the limit that was applied)
    pub limit: i64,
    /// Current page number
    pub page: i64,
    /// Number of pages for `total` items at `limit` per page
    pub total_pages: i64,
    /// Whether there are more items after this page
    pub has_more: bool,
}

impl PaginationMeta {
    #[must_use]
    pub fn new(total: i64, params: &PaginationParams) -> Self {
        let limit = params.limit();
        let page = params.page();
        let total_pages = if total == 0 {
            0
        } else {
            total.saturating_add(limit - 1) / limit
        };

        Self {
            total,
            limit,
            page,
            total_pages,
            has_more: params.offset().saturating_add(limit) < total,
        }
    }
}

/// Query parameters for pagination.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Maximum number of items to return (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl PaginationParams {
    #[must_use]
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self { page, limit }
    }

    /// Returns the effective limit, clamped to [1, 100].
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Returns the page number, clamped to a minimum of 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Rows to skip. Saturates at `i64::MAX` for absurd page numbers, which
    /// yields an empty page instead of an overflow.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_default() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_custom_values() {
        let params = PaginationParams::new(Some(3), Some(25));
        assert_eq!(params.page(), 3);
        assert_eq!(params.limit(), 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_pagination_params_clamping() {
        let params = PaginationParams::new(Some(-5), Some(200));
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 100);

        let params = PaginationParams::new(None, Some(0));
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_pagination_meta_last_page() {
        let params = PaginationParams::new(Some(3), Some(10));
        let meta = PaginationMeta::new(25, &params);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_pagination_meta_has_more() {
        let params = PaginationParams::new(Some(1), Some(10));
        let meta = PaginationMeta::new(25, &params);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_more);
    }

    #[test]
    fn test_pagination_meta_empty() {
        let meta = PaginationMeta::new(0, &PaginationParams::default());
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_huge_page_number_saturates() {
        let params = PaginationParams::new(Some(i64::MAX), Some(10));
        assert_eq!(params.offset(), i64::MAX);

        let meta = PaginationMeta::new(25, &params);
        assert_eq!(meta.page, i64::MAX);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_empty_query_values_are_ignored() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page": "", "limit": "20"}"#).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 20);
    }
}
