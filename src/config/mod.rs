//! Configuration loading and management

use crate::core::error::{ConfigError, ListingResult};
use serde::{Deserialize, Serialize};

/// Configuration for the listing query surface
///
/// Controls which query-parameter keys are recognized, the optional
/// namespace prefix, and the paging bounds applied when slicing views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Recognized query-parameter keys, in extraction order
    #[serde(default = "default_keys")]
    pub keys: Vec<String>,

    /// Optional namespace prefix: lookups become `{prefix}_{key}`
    #[serde(default)]
    pub prefix: Option<String>,

    /// Default page size when `limit` is absent or malformed
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Hard ceiling on page size
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_keys() -> Vec<String> {
    ["q", "order", "offset", "limit"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

fn default_limit() -> usize {
    20
}

fn default_max_limit() -> usize {
    100
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            keys: default_keys(),
            prefix: None,
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl ListingConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> ListingResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ListingResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the paging bounds
    pub fn validate(&self) -> ListingResult<()> {
        if self.max_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_limit".to_string(),
                value: self.max_limit.to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(ConfigError::InvalidValue {
                field: "default_limit".to_string(),
                value: self.default_limit.to_string(),
                message: format!("must be between 1 and max_limit ({})", self.max_limit),
            }
            .into());
        }

        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self::default()
    }
}
