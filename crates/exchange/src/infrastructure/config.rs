//! Configuration loading for the exchange
//!
//! Supports JSON configuration files for:
//! - Subscriber capacity
//! - Delivery failure policy
//! - Output line format

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::SinkFormat;
use crate::application::DeliveryPolicy;

/// Root configuration for an exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Maximum number of attached subscribers
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// What publish does when a notification fails
    #[serde(default)]
    pub delivery_policy: DeliveryPolicy,

    /// Line format for writer-based sinks
    #[serde(default)]
    pub sink_format: SinkFormat,
}

fn default_capacity() -> usize {
    3
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            delivery_policy: DeliveryPolicy::default(),
            sink_format: SinkFormat::default(),
        }
    }
}

impl ExchangeConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid(
                "capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
