//! Identity type.
//!
//! Wraps the store's age private key, kept in `<root>/identity.key`.

use std::fs;
use std::path::{Path, PathBuf};

use age::x25519;
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::types::PublicKey;
use crate::error::{Result, StoreError};

/// A private key identity for decrypting entries
pub struct Identity {
    inner: x25519::Identity,
    path: PathBuf,
}

impl Identity {
    /// Key file path inside a store root
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(constants::IDENTITY_FILE)
    }

    /// Load the identity from a store root
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoPrivateKey` if the key file is missing, or
    /// `StoreError::InvalidKey` if it cannot be parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let key_path = Self::path_in(root);
        debug!(path = %key_path.display(), "loading identity");

        if !key_path.exists() {
            return Err(StoreError::NoPrivateKey(key_path.display().to_string()).into());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            if let Ok(metadata) = fs::metadata(&key_path) {
                let mode = metadata.permissions().mode() & 0o777;
                if mode != 0o600 {
                    warn!(
                        path = %key_path.display(),
                        mode = %format!("{:o}", mode),
                        "insecure key file permissions"
                    );
                }
            }
        }

        let contents = fs::read_to_string(&key_path).map_err(|source| StoreError::Read {
            path: key_path.display().to_string(),
            source,
        })?;

        let inner: x25519::Identity = contents
            .trim()
            .parse()
            .map_err(|e: &str| StoreError::InvalidKey(e.to_string()))?;

        debug!("identity loaded");

        Ok(Self {
            inner,
            path: key_path,
        })
    }

    /// Generate a new identity and save it into a store root
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the key file cannot be written.
    pub fn generate(root: &Path) -> Result<Self> {
        debug!(path = %root.display(), "generating new identity");

        let inner = x25519::Identity::generate();
        let key_path = Self::path_in(root);
        let write_err = |source: std::io::Error| StoreError::Write {
            path: key_path.display().to_string(),
            source,
        };

        fs::create_dir_all(root).map_err(write_err)?;

        // Display on the identity outputs AGE-SECRET-KEY-...
        use age::secrecy::ExposeSecret;
        let secret_str = inner.to_string();
        fs::write(&key_path, format!("{}\n", secret_str.expose_secret())).map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&key_path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
        }

        debug!(path = %key_path.display(), "identity saved");

        Ok(Self {
            inner,
            path: key_path,
        })
    }

    /// Corresponding public key
    pub fn public_key(&self) -> PublicKey {
        self.inner.to_public().to_string()
    }

    /// Reference to the inner age identity for decryption
    pub fn as_age(&self) -> &x25519::Identity {
        &self.inner
    }

    /// Key file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("path", &self.path)
            .field("public_key", &self.public_key())
            .finish()
    }
}
