//! NeighborSource trait — the one capability the search core consumes.
//!
//! The engine never sees names, titles, or files; it asks for neighbor
//! pairs and nothing else. `degrees-store` implements this over the CSV
//! corpus; tests implement it over hand-built fixtures.

use crate::types::{MovieId, PersonId};

/// Read-only neighbor lookup over the bipartite membership graph.
///
/// The graph must not change for the duration of a search. Lookups are
/// total over valid ids: any id produced by `neighbors_of` must itself
/// satisfy `contains`.
pub trait NeighborSource {
    /// Whether the person id exists in the graph.
    fn contains(&self, person: &PersonId) -> bool;

    /// Every (movie, co-member) pair over the person's movies.
    ///
    /// The person may appear paired with themself if the membership data
    /// genuinely contains such a pair; the engine's explored-set equality
    /// keeps that from looping. Enumeration order is unspecified and
    /// callers must not depend on it.
    fn neighbors_of(&self, person: &PersonId) -> Vec<(MovieId, PersonId)>;
}
