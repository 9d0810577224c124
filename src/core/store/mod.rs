//! Entry storage.
//!
//! The `Store` trait is what the insert logic talks to; `Filesystem` keeps
//! age-encrypted entries under the store root.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::prompt::Prompt;
use crate::core::secret::Secret;
use crate::error::StoreError;

mod fs;

pub use fs::Filesystem;

/// Whether a write must be confirmed for the current recipients.
#[derive(Clone, Copy)]
pub enum Confirm<'a> {
    /// Never ask.
    Always,
    /// Ask through the given prompt.
    Ask(&'a dyn Prompt),
}

impl Confirm<'_> {
    /// Resolve the policy for one question.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Confirm` if the question could not be asked.
    pub fn allows(&self, message: &str) -> Result<bool, StoreError> {
        match self {
            Self::Always => Ok(true),
            Self::Ask(prompt) => prompt.ask_confirmation(message).map_err(StoreError::Confirm),
        }
    }
}

impl std::fmt::Debug for Confirm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => f.write_str("Always"),
            Self::Ask(_) => f.write_str("Ask"),
        }
    }
}

/// Entry storage trait.
///
/// Abstracts where entries live and how they are sealed, so the insert
/// state machine can be driven against an in-memory store in tests.
pub trait Store {
    /// Check if an entry exists.
    fn exists(&self, name: &str) -> bool;

    /// Load and decrypt an entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the entry doesn't exist, or a
    /// cipher/parse error if it cannot be opened.
    fn get(&self, name: &str) -> Result<Secret, StoreError>;

    /// Write an entry without asking anyone.
    ///
    /// `message` describes the change and is recorded with it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encryption or the write fails.
    fn set(&mut self, name: &str, secret: &Secret, message: &str) -> Result<(), StoreError>;

    /// Write an entry after the recipient set has been confirmed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RecipientsDeclined` if confirmation is refused,
    /// `StoreError::Confirm` if it could not be asked, otherwise as
    /// [`Store::set`].
    fn set_confirm(
        &mut self,
        name: &str,
        secret: &Secret,
        message: &str,
        confirm: Confirm<'_>,
    ) -> Result<(), StoreError>;
}
