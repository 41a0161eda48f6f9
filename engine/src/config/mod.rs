//! Config Module
//!
//! Centralized tunables for the combat core, the top-down camera and the
//! sandbox host. Every struct deserializes from JSON with per-field defaults,
//! so a config file only needs the values it overrides.

pub mod camera_config;
pub mod combat_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use camera_config::CameraConfig;
pub use combat_config::{CombatConfig, SwingMode};

/// Failure while loading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Shared JSON loading for the config structs.
pub trait JsonConfig: Sized + DeserializeOwned {
    /// Rejects values the combat core cannot work with.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Parses and validates a JSON document.
    fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Everything the sandbox binary needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub combat: CombatConfig,
    pub camera: CameraConfig,
    /// Initial window size in physical pixels
    pub window_size: (u32, u32),
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            combat: CombatConfig::default(),
            camera: CameraConfig::default(),
            window_size: (1280, 720),
        }
    }
}

impl JsonConfig for SandboxConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.combat.validate()?;
        self.camera.validate()?;
        if self.window_size.0 == 0 || self.window_size.1 == 0 {
            return Err(ConfigError::Invalid(format!(
                "window_size must be non-zero, got {:?}",
                self.window_size
            )));
        }
        Ok(())
    }
}
