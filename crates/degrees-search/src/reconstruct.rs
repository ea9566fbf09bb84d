//! Path reconstruction: goal node → ordered source-to-target hop list.

use degrees_core::{Hop, Path, PersonId, SearchError};

use crate::explored::ExploredSet;
use crate::node::SearchNode;

/// Walk parent back-references from the goal node to the source,
/// prepending one hop per node, and return the hops in source→target
/// order.
///
/// A goal with no parent is the source itself: the zero-hop path. Every
/// other ancestor must resolve through the explored set; a miss (or a
/// child node missing its action) means the engine's bookkeeping diverged
/// from the tree it describes, and surfaces as `BrokenChain` — a logic
/// fault, not a data condition.
pub fn reconstruct(
    goal: &SearchNode,
    explored: &ExploredSet,
    source: &PersonId,
) -> Result<Path, SearchError> {
    let mut hops: Vec<Hop> = Vec::new();
    let mut current = goal;

    loop {
        let parent = match &current.parent {
            None => break, // reached the source node itself
            Some(parent) => parent,
        };
        let action = current.action.as_ref().ok_or_else(|| SearchError::BrokenChain {
            state: current.state.clone(),
        })?;

        hops.push(Hop::new(action.clone(), current.state.clone()));

        if parent == source {
            break;
        }
        current = explored
            .get(parent)
            .ok_or_else(|| SearchError::BrokenChain {
                state: parent.clone(),
            })?;
    }

    hops.reverse();
    Ok(Path::from_hops(hops))
}
