//! Name→id resolution.
//!
//! Names are not unique in the corpus; resolution reports every candidate
//! and leaves the choice to the caller (interactive disambiguation is a
//! CLI concern).

use degrees_core::types::collections::FxHashMap;
use degrees_core::PersonId;

use crate::store::MembershipGraph;

/// Outcome of resolving a human-entered name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// No person with that name.
    None,
    /// Exactly one person with that name.
    Unique(PersonId),
    /// Several people share the name; candidates in unspecified order.
    Ambiguous(Vec<PersonId>),
}

/// Case-insensitive index from person name to the set of ids carrying it.
#[derive(Debug, Default)]
pub struct NameIndex {
    by_name: FxHashMap<String, Vec<PersonId>>,
}

impl NameIndex {
    /// Build the index from every person record in the graph.
    pub fn build(graph: &MembershipGraph) -> Self {
        let mut by_name: FxHashMap<String, Vec<PersonId>> = FxHashMap::default();
        for (id, person) in graph.people() {
            by_name
                .entry(person.name.to_lowercase())
                .or_default()
                .push(id.clone());
        }
        Self { by_name }
    }

    /// Resolve a name, ignoring case.
    pub fn resolve(&self, name: &str) -> NameMatch {
        match self.by_name.get(&name.to_lowercase()) {
            None => NameMatch::None,
            Some(ids) if ids.len() == 1 => NameMatch::Unique(ids[0].clone()),
            Some(ids) => NameMatch::Ambiguous(ids.clone()),
        }
    }
}
