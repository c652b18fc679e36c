//! Configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsbst/rsbst.toml`
//! 3. Environment variables: `RSBST_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::DeleteStrategy;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config load failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Unified configuration for rsbst.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Strategy applied when `delete` is issued without an explicit one
    pub default_strategy: DeleteStrategy,
    /// Prompt shown by the interactive shell
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_strategy: DeleteStrategy::Predecessor,
            prompt: "rsbst>".to_string(),
        }
    }
}

/// XDG config directory for rsbst.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsbst").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsbst.toml"))
}

impl Settings {
    /// Loads settings with layered precedence: defaults, then the global
    /// config file (if present), then `RSBST_*` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        let config = builder
            .add_source(Environment::with_prefix("RSBST"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Loads settings from an explicit TOML file, without environment
    /// overrides. Missing fields fall back to the compiled defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_sources_when_defaulting_then_uses_predecessor_strategy() {
        let settings = Settings::default();
        assert_eq!(settings.default_strategy, DeleteStrategy::Predecessor);
        assert!(!settings.prompt.is_empty());
    }

    #[test]
    fn given_settings_when_rendering_toml_then_strategy_is_lowercase() {
        let settings = Settings::default();
        let rendered = settings.to_toml().expect("render settings");
        assert!(rendered.contains("default_strategy = \"predecessor\""));
    }
}
