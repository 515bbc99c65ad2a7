//! Tool configuration module.
//!
//! Handles loading and validating `tripcard.toml`. Configuration is sparse:
//! stock defaults apply for every key the user leaves out, and unknown keys
//! are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! app_name = "Tripcard"   # Attribution line in every export
//! locale = "en"           # Locale for export strings and share dialogs
//!
//! # output_dir = "/tmp/exports"  # Omit to use the per-user cache directory
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Share configuration loaded from `tripcard.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareConfig {
    /// App name used in export attribution footers.
    pub app_name: String,
    /// Locale tag for export strings and share-dialog titles.
    /// Unknown locales fall back to English at lookup time.
    pub locale: String,
    /// Directory artifacts are written to. When absent, the per-user
    /// cache directory is used.
    pub output_dir: Option<PathBuf>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            app_name: "Tripcard".to_string(),
            locale: "en".to_string(),
            output_dir: None,
        }
    }
}

impl ShareConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::Validation("app_name must not be empty".into()));
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Validation("locale must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from `tripcard.toml` in the given directory.
///
/// Returns stock defaults if no `tripcard.toml` exists there. Rejects
/// unknown keys and validates the result.
pub fn load_config(dir: &Path) -> Result<ShareConfig, ConfigError> {
    let config_path = dir.join("tripcard.toml");
    if !config_path.exists() {
        return Ok(ShareConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ShareConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `tripcard.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Tripcard Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as tripcard.toml next to your entry store, or point the
# CLI at it with --config-dir.
#
# Unknown keys will cause an error.

# App name shown in the "Shared from ..." attribution line of every export.
app_name = "Tripcard"

# Locale for export strings and share-dialog titles.
# Available: "en", "de". Unknown locales fall back to "en".
locale = "en"

# Directory exports are written to.
# Omit or comment out to use the per-user cache directory.
# output_dir = "/tmp/exports"
"##
}
