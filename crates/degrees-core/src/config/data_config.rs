//! Data-loading configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the CSV-backed graph store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `people.csv`, `movies.csv`, and `stars.csv`.
    /// Default: "large".
    pub directory: Option<String>,
}

impl DataConfig {
    /// Returns the effective data directory, defaulting to "large".
    pub fn effective_directory(&self) -> &str {
        self.directory.as_deref().unwrap_or("large")
    }
}
