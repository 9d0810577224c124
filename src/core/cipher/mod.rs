//! Cryptographic operations.
//!
//! Entries are sealed with age (x25519 recipients, ASCII armor). The
//! `Cipher` trait keeps the store independent of the concrete backend.

use ::age::x25519;
use zeroize::Zeroizing;

use crate::error::CipherError;

mod age;

pub use age::{parse_recipient, Age};

/// Cryptographic backend trait.
///
/// Abstracts encryption and decryption so the store does not depend on a
/// particular backend.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext for multiple recipients.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(
        &self,
        plaintext: &[u8],
        recipients: &[Self::Recipient],
    ) -> Result<String, CipherError>;

    /// Decrypt an encrypted string using a private identity.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if decryption fails or the key doesn't match.
    fn decrypt(
        &self,
        encrypted: &str,
        identity: &Self::Identity,
    ) -> Result<Zeroizing<Vec<u8>>, CipherError>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext for multiple age recipients.
///
/// Returns an ASCII-armored string that any recipient can decrypt.
///
/// # Errors
///
/// Returns `CipherError` if encryption fails at any stage.
pub fn encrypt(plaintext: &[u8], recipients: &[x25519::Recipient]) -> Result<String, CipherError> {
    Age.encrypt(plaintext, recipients)
}

/// Decrypt an age-encrypted string using a private identity.
///
/// # Errors
///
/// Returns `CipherError` if decryption fails or the key doesn't match.
pub fn decrypt(
    encrypted: &str,
    identity: &x25519::Identity,
) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    Age.decrypt(encrypted, identity)
}
