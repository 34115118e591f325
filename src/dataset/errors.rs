//! Dataset errors

use std::io;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while building or loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),

    #[error("failed to read dataset file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DatasetError {
    /// Stable error code for outer surfaces
    pub fn code(&self) -> &'static str {
        match self {
            DatasetError::DuplicateOrderId(_) => "ORDERDESK_DATASET_DUPLICATE_ID",
            DatasetError::Io(_) => "ORDERDESK_DATASET_IO",
            DatasetError::Parse(_) => "ORDERDESK_DATASET_PARSE",
        }
    }
}
