//! CLI errors — aggregates subsystem errors via `From` conversions.

use super::error_code::ErrorCode;
use super::{ConfigError, SearchError, StoreError};

/// Errors surfaced by the interactive binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A prompted name matched no person, or disambiguation picked an id
    /// outside the candidate set.
    #[error("Person not found: {name}")]
    PersonNotFound { name: String },

    #[error("Usage: degrees [directory] [--max-depth N] [--json]")]
    Usage,
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Search(e) => e.error_code(),
            Self::Io(_) => super::error_code::IO_ERROR,
            Self::PersonNotFound { .. } => super::error_code::UNKNOWN_PERSON,
            Self::Usage => super::error_code::CONFIG_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_code;

    #[test]
    fn test_io_failures_carry_their_own_code() {
        let err = CliError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ));
        assert_eq!(err.error_code(), error_code::IO_ERROR);
    }

    #[test]
    fn test_wrapped_subsystem_errors_keep_their_codes() {
        let err = CliError::from(crate::SearchError::FrontierEmpty);
        assert_eq!(err.error_code(), error_code::SEARCH_ERROR);

        let err = CliError::PersonNotFound {
            name: "Nobody".to_string(),
        };
        assert_eq!(err.error_code(), error_code::UNKNOWN_PERSON);
    }
}
