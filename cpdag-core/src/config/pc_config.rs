//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{OrientationConfig, SkeletonConfig, SkeletonVariant};
use crate::constants::{ENV_MAX_CONDITIONING_SIZE, ENV_SIGNIFICANCE_LEVEL, ENV_SKELETON_VARIANT};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CPDAG_*`)
/// 2. Config file passed to [`PcConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PcConfig {
    pub skeleton: SkeletonConfig,
    pub orientation: OrientationConfig,
}

impl PcConfig {
    /// Load from `path` (if it exists), apply environment overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CPDAG_*` environment overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Split out of
    /// [`apply_env_overrides`](Self::apply_env_overrides) so tests don't have
    /// to mutate the process environment.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup(ENV_SIGNIFICANCE_LEVEL) {
            let value = raw.trim().parse::<f64>().map_err(|e| ConfigError::ValidationFailed {
                field: ENV_SIGNIFICANCE_LEVEL.to_string(),
                message: e.to_string(),
            })?;
            self.skeleton.significance_level = Some(value);
        }
        if let Some(raw) = lookup(ENV_MAX_CONDITIONING_SIZE) {
            let value = raw.trim().parse::<usize>().map_err(|e| ConfigError::ValidationFailed {
                field: ENV_MAX_CONDITIONING_SIZE.to_string(),
                message: e.to_string(),
            })?;
            self.skeleton.max_conditioning_size = Some(value);
        }
        if let Some(raw) = lookup(ENV_SKELETON_VARIANT) {
            self.skeleton.variant = SkeletonVariant::from_str_name(&raw).ok_or_else(|| {
                ConfigError::ValidationFailed {
                    field: ENV_SKELETON_VARIANT.to_string(),
                    message: format!("unknown variant '{raw}', expected classical or stable"),
                }
            })?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(alpha) = self.skeleton.significance_level {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "skeleton.significance_level".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }
}
