//! Breadth-first layer-expansion engine.

use degrees_core::config::SearchConfig;
use degrees_core::{CancelToken, NeighborSource, Path, PersonId, SearchError};

use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::reconstruct::reconstruct;

/// Per-search knobs. The default is an unbounded, uncancellable search,
/// which is the full shortest-path contract.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum number of layers to expand; `None` is unbounded. A bounded
    /// search reports connections past the bound as absent.
    pub max_depth: Option<u32>,
    /// Cooperative cancellation flag, checked at the top of each layer.
    pub cancel: Option<CancelToken>,
}

impl SearchOptions {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            cancel: None,
        }
    }
}

/// Counters from one search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Layers fully expanded before the search ended.
    pub layers: u32,
    /// Nodes moved into the explored set.
    pub nodes_expanded: usize,
}

/// Result of one search run: the path, if the target was reached, plus
/// traversal counters.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Breadth-first shortest-path engine over a [`NeighborSource`].
///
/// A run moves through four phases: initialized (frontier holds only the
/// source node), running (layer expansion), and then either succeeded
/// (target state found in the frontier) or exhausted (frontier emptied
/// first). Expansion is level-synchronous: each iteration drains the
/// entire frontier, so the goal check always sees one complete layer and
/// the first hit is a minimal path. Ties among equal-length paths follow
/// the store's enumeration order and are unspecified.
pub struct SearchEngine<'a, S: NeighborSource> {
    store: &'a S,
    options: SearchOptions,
}

impl<'a, S: NeighborSource> SearchEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_options(store, SearchOptions::default())
    }

    pub fn with_options(store: &'a S, options: SearchOptions) -> Self {
        Self { store, options }
    }

    /// Find a shortest path from `source` to `target`.
    ///
    /// Returns `Ok(None)` when the two are not connected — that is a
    /// normal outcome, not an error. `UnknownPerson` is reported before
    /// any expansion when either endpoint is absent from the store.
    pub fn run(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<SearchOutcome, SearchError> {
        for endpoint in [source, target] {
            if !self.store.contains(endpoint) {
                return Err(SearchError::UnknownPerson {
                    id: endpoint.clone(),
                });
            }
        }

        let mut frontier = Frontier::new();
        frontier.add(SearchNode::source(source.clone()));
        let mut explored = ExploredSet::new();
        let mut stats = SearchStats::default();

        loop {
            if let Some(cancel) = &self.options.cancel {
                if cancel.is_cancelled() {
                    return Err(SearchError::Cancelled);
                }
            }

            // Goal check over the complete current layer. With the source
            // still queued this also short-circuits source == target into
            // a zero-hop success.
            if frontier.contains_state(target) {
                let goal = frontier.find_by_state(target)?.clone();
                let path = reconstruct(&goal, &explored, source)?;
                tracing::debug!(
                    degrees = path.len(),
                    layers = stats.layers,
                    nodes_expanded = stats.nodes_expanded,
                    "Target found"
                );
                return Ok(SearchOutcome {
                    path: Some(path),
                    stats,
                });
            }

            // Exhausted: the previous layer produced no children and the
            // target never appeared.
            if frontier.is_empty() {
                tracing::debug!(
                    layers = stats.layers,
                    nodes_expanded = stats.nodes_expanded,
                    "Frontier exhausted, no path"
                );
                return Ok(SearchOutcome { path: None, stats });
            }

            if let Some(max_depth) = self.options.max_depth {
                if stats.layers >= max_depth {
                    tracing::debug!(max_depth, "Depth bound reached");
                    return Ok(SearchOutcome { path: None, stats });
                }
            }

            for node in frontier.drain_all() {
                // While a layer is being expanded the frontier holds none of
                // the drained nodes, so a node expanded earlier in the layer
                // can re-enqueue a later sibling's state (or a node its own,
                // via a self-pair). That duplicate reaches this loop one
                // layer deeper; expanding it would shadow the shallower
                // parent chain already recorded for the state.
                if explored.contains(&node.state) {
                    continue;
                }
                for (movie, person) in self.store.neighbors_of(&node.state) {
                    if explored.contains(&person) || frontier.contains_state(&person) {
                        continue;
                    }
                    frontier.add(SearchNode::child(person, node.state.clone(), movie));
                }
                explored.add(node);
                stats.nodes_expanded += 1;
            }
            stats.layers += 1;
        }
    }
}

/// Convenience wrapper: default options, no stats.
pub fn shortest_path<S: NeighborSource>(
    store: &S,
    source: &PersonId,
    target: &PersonId,
) -> Result<Option<Path>, SearchError> {
    SearchEngine::new(store).run(source, target).map(|o| o.path)
}
