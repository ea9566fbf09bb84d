//! degrees-search: breadth-first shortest-path engine.
//!
//! The engine expands the frontier one full layer at a time: the whole
//! frontier is drained before any of that layer's children become visible
//! to the goal check. That level-synchronous batching is what makes the
//! first discovered path a minimal one; a node-at-a-time loop would not
//! carry the same guarantee.
//!
//! Components:
//! - `Frontier`: FIFO waiting list of discovered-but-unexpanded nodes
//! - `ExploredSet`: states already fully expanded, keyed by state
//! - `SearchEngine`: the layer-expansion loop and goal detection
//! - `reconstruct`: parent-chain walk from the goal node back to the source

pub mod engine;
pub mod explored;
pub mod frontier;
pub mod node;
pub mod reconstruct;

pub use engine::{shortest_path, SearchEngine, SearchOptions, SearchOutcome, SearchStats};
pub use explored::ExploredSet;
pub use frontier::Frontier;
pub use node::SearchNode;
pub use reconstruct::reconstruct;
