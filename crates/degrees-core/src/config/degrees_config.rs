//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::{DataConfig, SearchConfig};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DEGREES_*`)
/// 3. Project config (`degrees.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DegreesConfig {
    pub data: DataConfig,
    pub search: SearchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_directory: Option<String>,
    pub max_depth: Option<u32>,
}

impl DegreesConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("degrees.toml");
        if project_config_path.exists() {
            let raw = std::fs::read_to_string(&project_config_path)?;
            config = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Self) {
        if let Ok(dir) = std::env::var("DEGREES_DATA_DIRECTORY") {
            if !dir.is_empty() {
                config.data.directory = Some(dir);
            }
        }
        if let Ok(depth) = std::env::var("DEGREES_MAX_DEPTH") {
            if let Ok(parsed) = depth.parse::<u32>() {
                config.search.max_depth = Some(parsed);
            }
        }
    }

    fn apply_cli_overrides(config: &mut Self, cli: &CliOverrides) {
        if let Some(dir) = &cli.data_directory {
            config.data.directory = Some(dir.clone());
        }
        if let Some(depth) = cli.max_depth {
            config.search.max_depth = Some(depth);
        }
    }

    fn validate(config: &Self) -> Result<(), ConfigError> {
        if let Some(dir) = &config.data.directory {
            if dir.is_empty() {
                return Err(ConfigError::Invalid {
                    message: "data.directory must not be empty".to_string(),
                });
            }
        }
        if config.search.max_depth == Some(0) {
            return Err(ConfigError::Invalid {
                message: "search.max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DegreesConfig::default();
        assert_eq!(config.data.effective_directory(), "large");
        assert!(config.search.max_depth.is_none());
    }

    #[test]
    fn test_from_toml() {
        let config = DegreesConfig::from_toml(
            r#"
            [data]
            directory = "small"

            [search]
            max_depth = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.data.effective_directory(), "small");
        assert_eq!(config.search.max_depth, Some(6));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = DegreesConfig::from_toml("[data]\ndirectory = \"small\"\n").unwrap();
        assert_eq!(config.data.effective_directory(), "small");
        assert!(config.search.max_depth.is_none());
    }

    #[test]
    fn test_zero_max_depth_rejected() {
        let result = DegreesConfig::from_toml("[search]\nmax_depth = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = DegreesConfig::from_toml("[data]\ndirectory = \"small\"\n").unwrap();
        let cli = CliOverrides {
            data_directory: Some("huge".to_string()),
            max_depth: Some(4),
        };
        DegreesConfig::apply_cli_overrides(&mut config, &cli);
        assert_eq!(config.data.effective_directory(), "huge");
        assert_eq!(config.search.max_depth, Some(4));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = DegreesConfig::from_toml("data = nonsense");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
