//! Shared domain types.

pub mod collections;
pub mod ids;
pub mod path;

pub use ids::{MovieId, PersonId};
pub use path::{Hop, Path};
