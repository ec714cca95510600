//! Configuration for the Wayfarer engine.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`WAYFARER_*`)
//! 2. Config file (`wayfarer.toml`)
//! 3. Compiled defaults

pub mod defaults;
pub mod inference_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;

use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfarerConfig {
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

impl WayfarerConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, apply `WAYFARER_*` environment
    /// overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_overrides(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (environment variables in production,
    /// a map in tests). Keys are given without the `WAYFARER_` prefix.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(raw) = lookup("ACTIVE_WINDOW_SECS") {
            self.inference.active_window_secs =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: format!("{ENV_PREFIX}ACTIVE_WINDOW_SECS"),
                        message: format!("expected an integer, got {raw:?}"),
                    })?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inference.validate()?;
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.observability.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
