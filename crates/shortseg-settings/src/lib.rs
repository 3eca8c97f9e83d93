//! shortseg Settings Crate
//!
//! Handles the filter configuration file: defaults, loading, saving and
//! validation.

pub mod config;
pub mod error;

pub use config::{FilterSettings, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
