//! Pagination of filtered views
//!
//! The dashboard pages its listings with offset/limit semantics; this
//! module slices a filtered view into one page and wraps it with the
//! metadata the table shell renders.

use serde::Serialize;

/// Paginated response structure
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    /// The page of data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Offset of the first item in this page
    pub offset: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filtering)
    pub total: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(offset: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to keep page math meaningful
        let limit = limit.max(1);

        Self {
            offset,
            limit,
            total,
            // Saturating: offset comes straight from the URL and can be
            // arbitrarily large
            has_next: offset.saturating_add(limit) < total,
            has_prev: offset > 0,
        }
    }
}

/// Slice one page out of a filtered view
///
/// An offset past the end yields an empty page with correct metadata,
/// not an error.
pub fn paginate<T: Clone>(view: &[T], offset: usize, limit: usize) -> PaginatedResponse<T> {
    let limit = limit.max(1);
    let total = view.len();
    let start = offset.min(total);
    let end = start.saturating_add(limit).min(total);

    PaginatedResponse {
        data: view[start..end].to_vec(),
        pagination: PaginationMeta::new(offset, limit, total),
    }
}
