//! Configuration file management.
//!
//! Handles locating the store directory and reading, writing, and validating
//! its `config.toml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::cipher;
use crate::core::constants;
use crate::core::types::{MemberName, PublicKey};
use crate::error::{ConfigError, Result};

/// Store configuration stored in `<root>/config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Metadata and behaviour switches
    pub cubby: Meta,
    /// Map of recipient names to age public keys
    #[serde(default)]
    pub recipients: BTreeMap<MemberName, PublicKey>,
}

/// Metadata section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
    /// Ask before encrypting an entry for the configured recipients
    #[serde(default = "default_confirm_recipients")]
    pub confirm_recipients: bool,
    /// Passwords shorter than this are reported as weak
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_confirm_recipients() -> bool {
    true
}

fn default_min_password_length() -> usize {
    constants::DEFAULT_MIN_PASSWORD_LENGTH
}

impl Config {
    /// Create a new configuration with current version and no recipients
    pub fn new() -> Self {
        Self {
            cubby: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                confirm_recipients: default_confirm_recipients(),
                min_password_length: default_min_password_length(),
            },
            recipients: BTreeMap::new(),
        }
    }

    /// Path to the configuration file inside a store root
    pub fn path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists inside a store root
    pub fn exists(root: &Path) -> bool {
        Self::path(root).exists()
    }

    /// Load configuration from `<root>/config.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(recipients = config.recipients.len(), "config loaded");

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `<root>/config.toml`
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, root: &Path) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(Self::path(root), contents).map_err(ConfigError::WriteFile)?;

        Ok(())
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field is present and looks like semver
    /// - At least one recipient exists
    /// - Every recipient is a valid age public key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue`, `ConfigError::MissingField` or
    /// `ConfigError::NoRecipients` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.cubby.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let version_parts: Vec<&str> = self.cubby.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.cubby.version),
            }
            .into());
        }

        if self.recipients.is_empty() {
            return Err(ConfigError::NoRecipients.into());
        }

        for (name, key) in &self.recipients {
            if cipher::parse_recipient(key).is_err() {
                return Err(ConfigError::InvalidValue {
                    field: "recipients",
                    reason: format!("invalid age public key for recipient '{}': {}", name, key),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the store root directory.
///
/// An explicit directory (from `--dir` or `CUBBY_DIR`) wins; otherwise the
/// store lives in `~/.cubby`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if no directory was given and the home
/// directory cannot be determined.
pub fn store_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(constants::STORE_DIR))
}
