//! Stable error-code strings for machine-readable reporting.

pub const SEARCH_ERROR: &str = "DEGREES_SEARCH_ERROR";
pub const UNKNOWN_PERSON: &str = "DEGREES_UNKNOWN_PERSON";
pub const STORE_ERROR: &str = "DEGREES_STORE_ERROR";
pub const IO_ERROR: &str = "DEGREES_IO_ERROR";
pub const CONFIG_ERROR: &str = "DEGREES_CONFIG_ERROR";
pub const CANCELLED: &str = "DEGREES_CANCELLED";

/// Maps an error to its stable code string. Codes are part of the CLI's
/// machine-readable surface and must not change between releases.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}
