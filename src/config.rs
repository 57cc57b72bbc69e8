//! Scheduling configuration.
//!
//! A single recognized option today: the per-student credit ceiling.
//!
//! ```toml
//! max_credits = 20
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default credit ceiling per student per term.
pub const DEFAULT_MAX_CREDITS: u32 = 20;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Term-wide scheduling limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulingConfig {
    /// Inclusive ceiling on a student's total credits.
    pub max_credits: u32,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            max_credits: DEFAULT_MAX_CREDITS,
        }
    }
}

impl SchedulingConfig {
    /// Sets the credit ceiling.
    pub fn with_max_credits(mut self, max_credits: u32) -> Self {
        self.max_credits = max_credits;
        self
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SchedulingConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_credits == 0 {
            return Err(ConfigError::Invalid(
                "max_credits must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
