//! Error handling for the degrees workspace.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cli_error;
pub mod config_error;
pub mod error_code;
pub mod search_error;
pub mod store_error;

pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use search_error::SearchError;
pub use store_error::StoreError;
