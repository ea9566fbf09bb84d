//! Configuration system.
//! TOML-based, layered resolution: CLI > env > `degrees.toml` > defaults.

pub mod data_config;
pub mod degrees_config;
pub mod search_config;

pub use data_config::DataConfig;
pub use degrees_config::{CliOverrides, DegreesConfig};
pub use search_config::SearchConfig;
