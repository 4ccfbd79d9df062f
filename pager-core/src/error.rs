//! Errors raised by the validating (strict) entry points.
//!
//! The default entry points never fail; they coerce instead.

use thiserror::Error;

/// Rejection reasons for strict configuration and navigation calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaginationError {
    #[error("total item count must be a non-negative integer, got {0}")]
    InvalidTotalItems(f64),
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(f64),
    #[error("current page must be a positive integer, got {0}")]
    InvalidCurrentPage(f64),
    #[error("window size must be a positive integer, got {0}")]
    InvalidWindowSize(f64),
    #[error("page size option must be a positive integer, got {0}")]
    InvalidPageSizeOption(f64),
    #[error("page {page} does not exist, available pages: 1-{total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
}
