//! degrees-core: shared types, traits, errors, and configuration for the
//! degrees-of-separation search engine.
//!
//! No algorithms live here. The search core is in `degrees-search`, the
//! membership graph and CSV ingestion in `degrees-store`.

pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

pub use config::{DataConfig, DegreesConfig, SearchConfig};
pub use errors::{ConfigError, ErrorCode, SearchError, StoreError};
pub use traits::{CancelToken, NeighborSource};
pub use types::{Hop, MovieId, Path, PersonId};
