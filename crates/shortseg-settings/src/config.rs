//! Configuration for the segment filter
//!
//! Settings are read from a JSON or TOML file. Every field is optional in
//! the file and falls back to its default. The default file lives in the
//! platform configuration directory, e.g. `~/.config/shortseg/config.toml`.

use serde::{Deserialize, Serialize};
use shortseg_core::{ConfigError, Threshold, TrackingMode};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// File name of the default settings file
pub const CONFIG_FILE_NAME: &str = "config.toml";

const APP_DIR_NAME: &str = "shortseg";

/// Settings for one filtering run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Moves shorter than this (mm) are commented out
    pub threshold: Threshold,
    /// How the tracked position carries across lines
    pub tracking_mode: TrackingMode,
    /// Appended to the input file stem to name the output
    pub output_suffix: String,
    /// Output extension when the input has none
    pub default_extension: String,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            tracking_mode: TrackingMode::default(),
            output_suffix: "-fixed".to_string(),
            default_extension: ".gcode".to_string(),
        }
    }
}

impl FilterSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform directory holding the default settings file
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Path of the default settings file
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load the default settings file, or defaults when it does not exist
    pub fn load_default() -> SettingsResult<Self> {
        let path = match Self::config_file_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!("Using built-in settings: {}", e);
                return Ok(Self::default());
            }
        };

        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let settings: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate settings
    ///
    /// The threshold is validated when it is constructed, so only the file
    /// naming fields are checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_suffix.is_empty() {
            return Err(ConfigError::InvalidSuffix {
                reason: "suffix must not be empty".to_string(),
            });
        }

        if has_separator(&self.output_suffix) {
            return Err(ConfigError::InvalidSuffix {
                reason: format!("'{}' contains a path separator", self.output_suffix),
            });
        }

        if has_separator(&self.default_extension) {
            return Err(ConfigError::InvalidSuffix {
                reason: format!("extension '{}' contains a path separator", self.default_extension),
            });
        }

        Ok(())
    }
}

fn has_separator(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
