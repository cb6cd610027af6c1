//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Match-making defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchmakingConfig {
    /// How many suggestions to return by default
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,

    /// Advisory cap on the available-player pool for doubles enumeration.
    /// Doubles candidates grow as 3 × C(n,4), which gets expensive beyond
    /// roughly 20-30 players.
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: usize,
}

fn default_suggestion_count() -> usize {
    5
}

fn default_max_pool_size() -> usize {
    24
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            suggestion_count: default_suggestion_count(),
            max_pool_size: default_max_pool_size(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub matchmaking: MatchmakingConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            matchmaking: MatchmakingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matchmaking.suggestion_count == 0 {
            return Err(ConfigError::ValidationError(
                "Suggestion count must be greater than 0".to_string(),
            ));
        }

        if self.matchmaking.max_pool_size < 4 {
            return Err(ConfigError::ValidationError(
                "Max pool size must be at least 4 (doubles)".to_string(),
            ));
        }

        Ok(())
    }
}
