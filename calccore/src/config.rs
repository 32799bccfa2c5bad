//! Calculator preferences
//!
//! Read from `config.json` in the platform config directory. Every field is
//! optional; a missing or broken file falls back to the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

const APP_NAME: &str = "calculator";
const CONFIG_FILE: &str = "config.json";

/// Window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 550.0,
            resizable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub window: WindowConfig,
    /// Most digits a single operand may hold. `None` leaves entry unbounded.
    pub max_digits: Option<usize>,
    /// Accept keyboard shortcuts in addition to keypad clicks.
    pub keyboard: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            max_digits: None,
            keyboard: true,
            log_level: "warn".to_string(),
        }
    }
}

impl CalcConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(config_path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, contents)?;
        Ok(())
    }

    /// Like [`CalcConfig::load`], but a missing file is `Ok(None)`.
    pub fn try_load(config_path: &Path) -> Result<Option<Self>> {
        match Self::load(config_path) {
            Ok(config) => Ok(Some(config)),
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Load from `config_path`, or the defaults if the file is absent or
    /// cannot be parsed. Never fails; the outcome says which case applied.
    pub fn load_or_default(config_path: &Path) -> (Self, LoadOutcome) {
        match Self::try_load(config_path) {
            Ok(Some(config)) => (config, LoadOutcome::Loaded),
            Ok(None) => (Self::default(), LoadOutcome::Missing),
            Err(err) => (Self::default(), LoadOutcome::Invalid(err)),
        }
    }
}

/// How [`CalcConfig::load_or_default`] produced its config.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded,
    /// No file yet; defaults in use.
    Missing,
    /// The file exists but could not be read; defaults in use.
    Invalid(ConfigError),
}

impl LoadOutcome {
    /// Log the outcome. The log level itself comes from the config, so call
    /// this after the subscriber is installed.
    pub fn report(&self, config_path: &Path) {
        let path = config_path.display();
        match self {
            LoadOutcome::Loaded => info!(%path, "loaded config"),
            LoadOutcome::Missing => info!(%path, "no config file, using defaults"),
            LoadOutcome::Invalid(err) => {
                warn!(%path, error = %err, "unreadable config, using defaults")
            }
        }
    }
}

/// Get the config directory for the calculator
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "moderncalculator", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Full path of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
