//! Graph store errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading or querying the membership graph.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing data file: {path}")]
    MissingFile { path: String },
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
