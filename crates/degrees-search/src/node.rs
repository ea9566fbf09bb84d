//! Search nodes: one reached state plus how it was reached.

use std::hash::{Hash, Hasher};

use degrees_core::{MovieId, PersonId};

/// The engine's working unit.
///
/// `parent` is a non-owning back-reference by state id into the explored
/// collection (the parent has always finished expanding by the time any of
/// its children are inspected). `parent` and `action` are `None` only for
/// the source node.
///
/// Identity is state-only: two nodes compare equal iff their states do,
/// regardless of how each was reached. The frontier/explored duplicate
/// checks depend on this, so equality is implemented explicitly rather
/// than derived.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<PersonId>,
    pub action: Option<MovieId>,
}

impl SearchNode {
    /// The root of the search tree.
    pub fn source(state: PersonId) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    /// A node reached from `parent` by traversing `action`.
    pub fn child(state: PersonId, parent: PersonId, action: MovieId) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}
