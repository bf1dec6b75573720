//! Validator configuration
//!
//! Loaded from a JSON file; every field has a default, so `{}` is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::schema::{SchemaValidator, UnknownKeys};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid log_filter '{filter}': {reason}")]
    LogFilter { filter: String, reason: String },
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Policy for undeclared keys (default: "strip")
    #[serde(default)]
    pub unknown_keys: UnknownKeys,

    /// `tracing` filter directive (default: "warn")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unknown_keys: UnknownKeys::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::LogFilter {
            filter: self.log_filter.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Validator built from this configuration
    pub fn validator(&self) -> SchemaValidator {
        SchemaValidator::new(self.unknown_keys)
    }
}
