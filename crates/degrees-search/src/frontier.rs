//! FIFO frontier of discovered-but-unexpanded nodes.

use std::collections::VecDeque;

use degrees_core::{PersonId, SearchError};

use crate::node::SearchNode;

/// Ordered waiting list for breadth-first expansion.
///
/// Invariant: no two queued nodes share a state. The container does not
/// enforce it; the engine checks `contains_state` (and the explored set)
/// before every `add`.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<SearchNode>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node at the back. No dedup here; callers check first.
    pub fn add(&mut self, node: SearchNode) {
        self.queue.push_back(node);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether any queued node carries this state. Scans the whole queue:
    /// the goal can sit anywhere in the current layer, not just at the
    /// head.
    pub fn contains_state(&self, state: &PersonId) -> bool {
        self.queue.iter().any(|node| node.state == *state)
    }

    /// FIFO pop. Calling this on an empty frontier is an engine bug, not a
    /// data condition.
    pub fn remove_oldest(&mut self) -> Result<SearchNode, SearchError> {
        self.queue.pop_front().ok_or(SearchError::FrontierEmpty)
    }

    /// Empty the whole frontier at once, preserving order. The engine
    /// drains a full layer before expanding it, so none of the layer's
    /// children are visible to `contains_state` until the layer is done.
    pub fn drain_all(&mut self) -> Vec<SearchNode> {
        self.queue.drain(..).collect()
    }

    /// The unique queued node with this state (unique by the engine's
    /// insertion discipline).
    pub fn find_by_state(&self, state: &PersonId) -> Result<&SearchNode, SearchError> {
        self.queue
            .iter()
            .find(|node| node.state == *state)
            .ok_or_else(|| SearchError::NodeNotFound {
                state: state.clone(),
            })
    }
}
