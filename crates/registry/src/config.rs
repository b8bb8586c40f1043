//! Registry configuration with environment overrides

use serde::{Deserialize, Serialize};
use teardown_core::constants::{
    DEFAULT_INITIAL_CAPACITY, DEFAULT_RELEASE_ON_DROP, TEARDOWN_INITIAL_CAPACITY_VAR,
    TEARDOWN_RELEASE_ON_DROP_VAR,
};

/// Errors raised while reading registry configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {variable}: {message}")]
    InvalidValue {
        variable: &'static str,
        value: String,
        message: String,
    },
}

/// Settings for a [`ResourceRegistry`](crate::ResourceRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Stack slots allocated up front
    pub initial_capacity: usize,
    /// Drain pending entries quietly when the registry is dropped
    pub release_on_drop: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            release_on_drop: DEFAULT_RELEASE_ON_DROP,
        }
    }
}

impl RegistryConfig {
    /// Defaults overlaid with any `TEARDOWN_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Apply `TEARDOWN_*` environment variables on top of `self`.
    ///
    /// Unset variables leave the current value alone; set but unparsable
    /// ones are an error rather than being ignored.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(capacity) = std::env::var(TEARDOWN_INITIAL_CAPACITY_VAR) {
            self.initial_capacity = capacity.trim().parse::<usize>().map_err(|e| {
                ConfigError::InvalidValue {
                    variable: TEARDOWN_INITIAL_CAPACITY_VAR,
                    value: capacity.clone(),
                    message: e.to_string(),
                }
            })?;
        }

        if let Ok(release_on_drop) = std::env::var(TEARDOWN_RELEASE_ON_DROP_VAR) {
            self.release_on_drop = parse_flag(&release_on_drop).ok_or_else(|| {
                ConfigError::InvalidValue {
                    variable: TEARDOWN_RELEASE_ON_DROP_VAR,
                    value: release_on_drop.clone(),
                    message: "expected true or false".to_string(),
                }
            })?;
        }

        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
