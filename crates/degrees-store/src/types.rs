//! Store record types.

use serde::{Deserialize, Serialize};

/// Attributes of a person. Owned by the store, never seen by the search
/// core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Birth year as it appears in the source data; may be empty.
    pub birth: String,
}

/// Attributes of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Release year as it appears in the source data; may be empty.
    pub year: String,
}
