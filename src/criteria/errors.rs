//! Criteria errors
//!
//! All criteria errors are input-validation failures raised at the store
//! boundary. None of them leave the store partially updated.

use thiserror::Error;

/// Result type for criteria operations
pub type CriteriaResult<T> = Result<T, CriteriaError>;

/// Criteria validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("page size must be greater than zero, got {0}")]
    InvalidPageSize(usize),

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unknown date filter: {0}")]
    UnknownDateFilter(String),
}

impl CriteriaError {
    /// Stable error code for outer surfaces
    pub fn code(&self) -> &'static str {
        match self {
            CriteriaError::InvalidPageSize(_) => "ORDERDESK_INVALID_PAGE_SIZE",
            CriteriaError::UnknownSortField(_) => "ORDERDESK_UNKNOWN_SORT_FIELD",
            CriteriaError::UnknownSortDirection(_) => "ORDERDESK_UNKNOWN_SORT_DIRECTION",
            CriteriaError::UnknownStatus(_) => "ORDERDESK_UNKNOWN_STATUS",
            CriteriaError::UnknownDateFilter(_) => "ORDERDESK_UNKNOWN_DATE_FILTER",
        }
    }
}
