//! Explored set: states already fully expanded.

use degrees_core::types::collections::FxHashMap;
use degrees_core::PersonId;

use crate::node::SearchNode;

/// States whose neighbors have all been considered, keyed by state.
///
/// Doubles as the arena the parent back-references resolve through: a
/// node's parent id always names a state added here before any of that
/// node's siblings were inspected.
#[derive(Debug, Default)]
pub struct ExploredSet {
    nodes: FxHashMap<PersonId, SearchNode>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, state: &PersonId) -> bool {
        self.nodes.contains_key(state)
    }

    /// Record a node as explored, only after all of its neighbors have
    /// been considered for insertion.
    ///
    /// First write wins: a state enters the set at most once, and the
    /// entry that wins is the shallowest, since layers are expanded in
    /// breadth-first order. Parent chains resolve through these entries,
    /// so replacing one with a later (deeper) node would lengthen every
    /// reconstructed path passing through it.
    pub fn add(&mut self, node: SearchNode) {
        self.nodes.entry(node.state.clone()).or_insert(node);
    }

    /// Resolve an ancestor by state during path reconstruction.
    pub fn get(&self, state: &PersonId) -> Option<&SearchNode> {
        self.nodes.get(state)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_after_add() {
        let mut explored = ExploredSet::new();
        assert!(!explored.contains(&"a".into()));

        explored.add(SearchNode::source("a".into()));
        assert!(explored.contains(&"a".into()));
        assert_eq!(explored.len(), 1);
    }

    #[test]
    fn test_add_keeps_the_first_entry_for_a_state() {
        let mut explored = ExploredSet::new();
        explored.add(SearchNode::child("b".into(), "a".into(), "m1".into()));
        explored.add(SearchNode::child("b".into(), "c".into(), "m2".into()));

        let node = explored.get(&"b".into()).unwrap();
        assert_eq!(node.parent, Some("a".into()));
        assert_eq!(node.action, Some("m1".into()));
        assert_eq!(explored.len(), 1);
    }

    #[test]
    fn test_get_resolves_the_stored_node() {
        let mut explored = ExploredSet::new();
        explored.add(SearchNode::child("b".into(), "a".into(), "m1".into()));

        let node = explored.get(&"b".into()).unwrap();
        assert_eq!(node.parent, Some("a".into()));
        assert_eq!(node.action, Some("m1".into()));
        assert!(explored.get(&"z".into()).is_none());
    }
}
