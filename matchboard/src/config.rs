//! Page behaviour configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tablesort::SortMarkers;
use thiserror::Error;

use crate::paths;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the page behaviours. Every field has a default, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Header classes marking the sorted column and its direction.
    pub sort_markers: SortMarkers,
    /// Delay before non-permanent alerts are dismissed.
    pub alert_dismiss_after_ms: u64,
    /// Alerts carrying this class are never auto-dismissed.
    pub permanent_alert_class: String,
    /// Requests finishing faster than this never show the spinner.
    pub spinner_delay_ms: u64,
    /// Element receiving the password strength label.
    pub password_indicator_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sort_markers: SortMarkers::default(),
            alert_dismiss_after_ms: 5000,
            permanent_alert_class: "alert-permanent".to_string(),
            spinner_delay_ms: 300,
            password_indicator_id: "password-strength".to_string(),
        }
    }
}

impl PageConfig {
    pub fn alert_dismiss_after(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_after_ms)
    }

    pub fn spinner_delay(&self) -> Duration {
        Duration::from_millis(self.spinner_delay_ms)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("[config] {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from the platform config directory, falling back to defaults
    /// when there is none.
    pub fn load_default() -> Result<Self, ConfigError> {
        match paths::config_file() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
