//! Search errors.

use crate::types::PersonId;

use super::error_code::{self, ErrorCode};

/// Errors that can occur during a shortest-path search.
///
/// "No path exists" is not represented here: an exhausted search is a normal
/// outcome and surfaces as `Ok(None)`. The `FrontierEmpty`, `NodeNotFound`,
/// and `BrokenChain` variants signal violated engine invariants; they are
/// never caught and retried.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Source or target id is not present in the graph store. Reported
    /// before any expansion; distinct from "no path".
    #[error("Unknown person id: {id}")]
    UnknownPerson { id: PersonId },

    /// `remove_oldest` was called on an empty frontier.
    #[error("Frontier is empty")]
    FrontierEmpty,

    /// `find_by_state` found no frontier node with the given state.
    #[error("No frontier node with state {state}")]
    NodeNotFound { state: PersonId },

    /// An ancestor in the goal node's parent chain could not be resolved
    /// in the explored set.
    #[error("Broken parent chain at {state}")]
    BrokenChain { state: PersonId },

    /// The search was cancelled at a layer boundary.
    #[error("Search cancelled")]
    Cancelled,
}

impl ErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPerson { .. } => error_code::UNKNOWN_PERSON,
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::SEARCH_ERROR,
        }
    }
}
