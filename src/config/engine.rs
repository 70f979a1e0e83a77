//! Rating engine configuration
//!
//! Values can come from defaults, a TOML file or environment variables. Every
//! loader validates before handing the config back.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_ADJUSTMENT_FACTOR: f64 = 32.0;

pub const ENV_ROUND_RESULT: &str = "ELO_ROUND_RESULT";
pub const ENV_ADJUSTMENT_FACTOR: &str = "ELO_ADJUSTMENT_FACTOR";

/// Settings fixed for the lifetime of a rating engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Round updated ratings to the nearest integer
    #[serde(default = "default_round_result")]
    pub round_result: bool,
    /// K-factor scaling the size of every rating change
    #[serde(default = "default_adjustment_factor")]
    pub adjustment_factor: f64,
}

fn default_round_result() -> bool {
    true
}

fn default_adjustment_factor() -> f64 {
    DEFAULT_ADJUSTMENT_FACTOR
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            round_result: default_round_result(),
            adjustment_factor: default_adjustment_factor(),
        }
    }
}

impl EngineConfig {
    pub fn new(round_result: bool, adjustment_factor: f64) -> Self {
        Self {
            round_result,
            adjustment_factor,
        }
    }

    /// Default K-factor with rounding turned off
    pub fn unrounded() -> Self {
        Self {
            round_result: false,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.adjustment_factor.is_finite() || self.adjustment_factor <= 0.0 {
            return Err(RatingError::InvalidAdjustmentFactor {
                value: self.adjustment_factor,
            });
        }

        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a TOML file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RatingError::Configuration {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| RatingError::Configuration {
            message: format!("Invalid TOML configuration: {}", e),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(round) = lookup(ENV_ROUND_RESULT) {
            config.round_result = round.trim().parse().map_err(|_| RatingError::Configuration {
                message: format!("Invalid {} value: {}", ENV_ROUND_RESULT, round),
            })?;
        }
        if let Some(factor) = lookup(ENV_ADJUSTMENT_FACTOR) {
            config.adjustment_factor =
                factor.trim().parse().map_err(|_| RatingError::Configuration {
                    message: format!("Invalid {} value: {}", ENV_ADJUSTMENT_FACTOR, factor),
                })?;
        }

        config.validate()?;
        Ok(config)
    }
}
