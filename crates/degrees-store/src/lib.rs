//! degrees-store: the graph-store collaborator for the degrees search core.
//!
//! Holds the three relations — person records, movie records, and
//! person↔movie membership — loaded from CSV, and exposes neighbor lookup
//! through `degrees_core::NeighborSource`. Name→id resolution lives here
//! too; everything interactive about it belongs to the CLI.

pub mod loader;
pub mod names;
pub mod store;
pub mod types;

pub use loader::{load_directory, LoadStats};
pub use names::{NameIndex, NameMatch};
pub use store::MembershipGraph;
pub use types::{Movie, Person};
