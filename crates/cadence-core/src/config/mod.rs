//! Configuration for every Cadence subsystem.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`CADENCE_*`)
//! 2. TOML file passed to [`CadenceConfig::load`]
//! 3. Compiled defaults (see [`defaults`])

pub mod cycle_config;
pub mod defaults;
pub mod notification_config;
pub mod observability_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cycle_config::CycleConfig;
pub use notification_config::NotificationConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::constants::MAX_CYCLE_LENGTH;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub cycle: CycleConfig,
    pub notifications: NotificationConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl CadenceConfig {
    /// Load from a TOML file, apply `CADENCE_*` env overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: CadenceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no env overrides).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CadenceConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let default_len = self.cycle.default_cycle_length;
        if default_len == 0 || default_len > MAX_CYCLE_LENGTH {
            return Err(ConfigError::ValidationFailed {
                field: "cycle.default_cycle_length".to_string(),
                message: format!("must be between 1 and {MAX_CYCLE_LENGTH}"),
            });
        }
        if self.cycle.luteal_phase_length == 0 || self.cycle.luteal_phase_length > MAX_CYCLE_LENGTH
        {
            return Err(ConfigError::ValidationFailed {
                field: "cycle.luteal_phase_length".to_string(),
                message: format!("must be between 1 and {MAX_CYCLE_LENGTH}"),
            });
        }
        if self.storage.db_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.db_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the file/default value is kept.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CADENCE_DAILY_LIMIT") {
            if let Ok(v) = val.parse::<u32>() {
                self.notifications.daily_limit = v;
            }
        }
        if let Ok(val) = std::env::var("CADENCE_DB_PATH") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("CADENCE_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }
}
