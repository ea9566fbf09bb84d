//! Seam traits between the search core and its collaborators.

pub mod cancellation;
pub mod neighbor_source;

pub use cancellation::CancelToken;
pub use neighbor_source::NeighborSource;
