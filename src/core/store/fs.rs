//! Filesystem-based entry storage.
//!
//! Layout under the store root:
//!
//! ```text
//! <root>/
//! ├── config.toml        # recipients and settings
//! ├── identity.key       # age private key (0600)
//! ├── history.log        # one line per write: time, entry, message
//! └── store/
//!     └── web/github.age # armored age ciphertext of one entry
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use age::x25519;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{Confirm, Store};
use crate::core::cipher;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::identity::Identity;
use crate::core::secret::Secret;
use crate::core::validation::validate_entry_name;
use crate::error::{ConfigError, Result, StoreError};

/// Age-encrypted entries in a directory tree.
#[derive(Debug)]
pub struct Filesystem {
    root: PathBuf,
    config: Config,
    identity: Identity,
}

impl Filesystem {
    /// Open an existing store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the root has no config,
    /// or an error if the config or private key cannot be loaded.
    pub fn open(root: &Path) -> Result<Self> {
        let config = Config::load(root)?;
        let identity = Identity::load(root)?;

        debug!(root = %root.display(), "store opened");

        Ok(Self {
            root: root.to_path_buf(),
            config,
            identity,
        })
    }

    /// Initialize a new store with `recipient` as its first recipient.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if a config already exists,
    /// or an error if the key or config cannot be written.
    pub fn init(root: &Path, recipient: &str) -> Result<Self> {
        if Config::exists(root) {
            return Err(ConfigError::AlreadyInitialized(root.display().to_string()).into());
        }

        let identity = Identity::generate(root)?;

        let mut config = Config::new();
        config
            .recipients
            .insert(recipient.to_string(), identity.public_key());
        config.save(root)?;

        info!(root = %root.display(), recipient, "store initialized");

        Ok(Self {
            root: root.to_path_buf(),
            config,
            identity,
        })
    }

    /// Store configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The store's own identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Path of the change journal.
    pub fn history_path(&self) -> PathBuf {
        self.root.join(constants::HISTORY_FILE)
    }

    /// Path of the encrypted file for an entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidName` if the name cannot be a store path.
    pub fn entry_path(&self, name: &str) -> std::result::Result<PathBuf, StoreError> {
        validate_entry_name(name)?;
        Ok(self
            .root
            .join(constants::ENTRIES_DIR)
            .join(format!("{}.{}", name, constants::ENTRY_EXT)))
    }

    fn recipients(&self) -> std::result::Result<Vec<x25519::Recipient>, StoreError> {
        self.config
            .recipients
            .values()
            .map(|key| cipher::parse_recipient(key).map_err(StoreError::from))
            .collect()
    }

    fn write(&self, name: &str, secret: &Secret, message: &str) -> std::result::Result<(), StoreError> {
        let path = self.entry_path(name)?;
        let write_err = |source: std::io::Error| StoreError::Write {
            path: path.display().to_string(),
            source,
        };

        let plaintext = Zeroizing::new(secret.to_bytes().map_err(StoreError::Encode)?);
        let armored = cipher::encrypt(&plaintext, &self.recipients()?)?;

        let dir = path.parent().unwrap_or(self.root.as_path());
        fs::create_dir_all(dir).map_err(write_err)?;

        // Write next to the target so the rename stays on one filesystem
        let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
        temp.write_all(armored.as_bytes()).map_err(write_err)?;
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(&path).map_err(|e| write_err(e.error))?;

        self.record(name, message)?;

        info!(name, message, "entry written");
        Ok(())
    }

    /// Append one line to the change journal.
    fn record(&self, name: &str, message: &str) -> std::result::Result<(), StoreError> {
        let path = self.history_path();
        let line = format!(
            "{}\t{}\t{}\n",
            chrono::Utc::now().to_rfc3339(),
            name,
            message.replace(['\n', '\t'], " ")
        );

        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|source| StoreError::Write {
                path: path.display().to_string(),
                source,
            })
    }
}

impl Store for Filesystem {
    fn exists(&self, name: &str) -> bool {
        self.entry_path(name).map(|p| p.is_file()).unwrap_or(false)
    }

    fn get(&self, name: &str) -> std::result::Result<Secret, StoreError> {
        let path = self.entry_path(name)?;
        debug!(name, path = %path.display(), "reading entry");

        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        let armored = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let plaintext = cipher::decrypt(&armored, self.identity.as_age())?;

        Secret::parse(&plaintext).map_err(StoreError::Malformed)
    }

    fn set(&mut self, name: &str, secret: &Secret, message: &str) -> std::result::Result<(), StoreError> {
        self.write(name, secret, message)
    }

    fn set_confirm(
        &mut self,
        name: &str,
        secret: &Secret,
        message: &str,
        confirm: Confirm<'_>,
    ) -> std::result::Result<(), StoreError> {
        if self.config.cubby.confirm_recipients {
            let names: Vec<&str> = self.config.recipients.keys().map(String::as_str).collect();
            let question = format!(
                "Encrypt '{}' for {} recipient(s): {}. Continue?",
                name,
                names.len(),
                names.join(", ")
            );
            if !confirm.allows(&question)? {
                return Err(StoreError::RecipientsDeclined);
            }
        }

        self.write(name, secret, message)
    }
}
