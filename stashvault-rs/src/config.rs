//! Optional user configuration.
//!
//! Read from `$STASHVAULT_CONFIG` or `<config dir>/stashvault/config.toml`:
//! ```toml
//! vault_root = "/home/me/snippets"
//! default_extension = ".md"
//! log_level = "info"
//! ```
//! The file is never written by Stashvault; a missing file means defaults.

use crate::error::{Result, VaultError};
use crate::extension::{resolve_extension, DEFAULT_EXTENSION};
use crate::paths::{VaultPaths, APP_ID};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "STASHVAULT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the default vault location.
    pub vault_root: Option<PathBuf>,
    /// Extension used when a save names none.
    pub default_extension: String,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_root: None,
            default_extension: DEFAULT_EXTENSION.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Where the config file is looked up.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }
        dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.toml"))
    }

    /// Load the config from its default location.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        resolve_extension(&self.default_extension, DEFAULT_EXTENSION).map_err(|_| {
            VaultError::ConfigError(format!(
                "unsupported default_extension '{}'",
                self.default_extension
            ))
        })?;
        Ok(())
    }

    /// Pick the vault root: CLI override, then config, then the data directory.
    pub fn resolve_vault_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(ref path) = self.vault_root {
            return Ok(path.clone());
        }
        VaultPaths::default_root()
    }
}
