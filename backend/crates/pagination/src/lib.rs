//! Offset pagination primitives shared by backend list endpoints.
//!
//! Purpose: give every paged endpoint one vocabulary for page requests and
//! page metadata so handlers and repositories agree on limits, offsets, and
//! ordering without re-deriving the arithmetic per endpoint.
//!
//! Public surface:
//! - [`PageRequest`] — limit/offset plus ordering for a single page fetch.
//! - [`OrderDirection`] — ascending or descending sort order.
//! - [`PageInfo`] — total row count and derived total page count.
//! - [`PaginationError`] — validation failures for page parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort direction applied to the ordering field of a page request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Smallest values first.
    Asc,
    /// Largest values first.
    #[default]
    Desc,
}

/// Parameters describing one page fetch.
///
/// The ordering field is an opaque column name; validating it against the
/// entity's sortable columns is the repository's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Maximum number of rows in the page. Must be positive.
    pub limit: u64,
    /// Number of rows skipped before the page starts.
    pub offset: u64,
    /// Field the page is ordered by, when the caller asked for one.
    pub order_by: Option<String>,
    /// Direction applied to `order_by`.
    pub direction: OrderDirection,
}

impl PageRequest {
    /// Build a request for the first page with the given limit and no
    /// explicit ordering.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let page = PageRequest::first(20);
    /// assert_eq!(page.offset, 0);
    /// ```
    #[must_use]
    pub const fn first(limit: u64) -> Self {
        Self {
            limit,
            offset: 0,
            order_by: None,
            direction: OrderDirection::Desc,
        }
    }

    /// Replace the ordering field and direction.
    #[must_use]
    pub fn ordered_by(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some(field.into());
        self.direction = direction;
        self
    }

    /// Replace the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

/// Validation failures for page parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The page limit was zero; a page must hold at least one row.
    #[error("page limit must be positive")]
    InvalidLimit,
}

/// Page metadata returned alongside a page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total number of rows matching the filter, across all pages.
    pub total: u64,
    /// Number of pages needed to cover `total` rows at the given limit.
    pub total_pages: u64,
}

impl PageInfo {
    /// Derive page metadata from a total row count and a page limit.
    ///
    /// `total_pages` is `ceil(total / limit)`, so an empty result set yields
    /// zero pages.
    ///
    /// # Errors
    /// Returns [`PaginationError::InvalidLimit`] when `limit` is zero.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageInfo;
    ///
    /// let info = PageInfo::compute(41, 20).expect("positive limit");
    /// assert_eq!(info.total_pages, 3);
    /// ```
    pub const fn compute(total: u64, limit: u64) -> Result<Self, PaginationError> {
        if limit == 0 {
            return Err(PaginationError::InvalidLimit);
        }
        Ok(Self {
            total,
            total_pages: total.div_ceil(limit),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 20, 0)]
    #[case(1, 20, 1)]
    #[case(20, 20, 1)]
    #[case(21, 20, 2)]
    #[case(41, 20, 3)]
    #[case(7, 1, 7)]
    fn compute_rounds_total_pages_up(#[case] total: u64, #[case] limit: u64, #[case] pages: u64) {
        let info = PageInfo::compute(total, limit).expect("positive limit");
        assert_eq!(info.total, total);
        assert_eq!(info.total_pages, pages);
    }

    #[rstest]
    #[case(0)]
    #[case(15)]
    fn compute_rejects_zero_limit(#[case] total: u64) {
        let err = PageInfo::compute(total, 0).expect_err("zero limit rejected");
        assert_eq!(err, PaginationError::InvalidLimit);
    }

    #[rstest]
    fn first_page_starts_at_offset_zero() {
        let page = PageRequest::first(25);
        assert_eq!(page.limit, 25);
        assert_eq!(page.offset, 0);
        assert!(page.order_by.is_none());
    }

    #[rstest]
    fn ordering_builder_replaces_field_and_direction() {
        let page = PageRequest::first(10)
            .ordered_by("createdAt", OrderDirection::Asc)
            .with_offset(30);
        assert_eq!(page.order_by.as_deref(), Some("createdAt"));
        assert_eq!(page.direction, OrderDirection::Asc);
        assert_eq!(page.offset, 30);
    }

    #[rstest]
    fn direction_serialises_lowercase() {
        let json = serde_json::to_string(&OrderDirection::Desc).expect("serialise");
        assert_eq!(json, "\"desc\"");
    }
}
