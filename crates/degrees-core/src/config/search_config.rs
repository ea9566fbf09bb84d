//! Search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the breadth-first search engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of layers to expand before giving up. `None` means
    /// unbounded, which preserves the guarantee that a path is found
    /// whenever one exists. A bounded search reports connections past the
    /// bound as absent.
    pub max_depth: Option<u32>,
}
