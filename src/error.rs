//! Error types for cubby.
//!
//! `Error` is what a command ends with. Each variant maps to its own process
//! exit code (see [`Error::exit_code`]). The layer errors below it
//! (`ConfigError`, `StoreError`, `CipherError`, `SecretError`) describe what
//! went wrong inside a single component and are wrapped with the entry they
//! concern before they reach the top level.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The entry (and optional field) an operation was working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Entry name.
    pub name: String,
    /// Field key, when a single field was targeted.
    pub key: Option<String>,
}

impl Target {
    /// Target a whole entry.
    pub fn entry(name: &str) -> Self {
        Self {
            name: name.to_string(),
            key: None,
        }
    }

    /// Target one field of an entry.
    pub fn field(name: &str, key: &str) -> Self {
        Self {
            name: name.to_string(),
            key: Some(key.to_string()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "key '{}' of '{}'", key, self.name),
            None => write!(f, "'{}'", self.name),
        }
    }
}

/// Top-level error for a cubby invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// The command was invoked incorrectly.
    #[error("usage: {0}")]
    Usage(String),

    /// Reading stdin or talking to the terminal failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Loading an existing entry failed.
    #[error("failed to read {target}: {source}")]
    StoreRead {
        target: Target,
        #[source]
        source: StoreError,
    },

    /// Writing an entry failed.
    #[error("failed to write {target}: {source}")]
    StoreWrite {
        target: Target,
        #[source]
        source: StoreError,
    },

    /// Supplied content is not a well-formed secret document.
    #[error("failed to parse secret for {target}: {source}")]
    Parse {
        target: Target,
        #[source]
        source: SecretError,
    },

    /// A single field could not be set.
    #[error("failed to set {target}: {source}")]
    FieldSet {
        target: Target,
        #[source]
        source: SecretError,
    },

    /// The editor could not be started or did not exit cleanly.
    #[error("failed to start editor: {0}")]
    Editor(#[source] io::Error),

    /// The user declined to overwrite an existing entry.
    #[error("not overwriting your current secret")]
    Aborted,

    /// The user interrupted a prompt.
    #[error("cancelled")]
    Cancelled,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    /// Wrap a terminal I/O failure, turning an interrupted read into `Cancelled`.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::Interrupted {
            return Self::Cancelled;
        }
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Aborted => 3,
            Self::Io { .. } => 4,
            Self::StoreRead { .. } => 5,
            Self::StoreWrite { .. } => 6,
            Self::Parse { .. } => 7,
            Self::FieldSet { .. } => 8,
            Self::Editor(_) => 9,
            Self::Config(_) | Self::Store(_) => 10,
            Self::Cancelled => 130,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("store not initialized: run `cubby init` first")]
    NotInitialized,

    #[error("store already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] io::Error),

    #[error("failed to write config: {0}")]
    WriteFile(#[source] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("no recipients configured")]
    NoRecipients,
}

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no private key found at {0}")]
    NoPrivateKey(String),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("entry not found: {0}")]
    NotFound(String),

    #[error("no key '{key}' in '{name}'")]
    FieldNotFound { name: String, key: String },

    #[error("invalid entry name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("recipient confirmation declined")]
    RecipientsDeclined,

    #[error("failed to ask for confirmation: {0}")]
    Confirm(#[source] io::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("stored entry is malformed: {0}")]
    Malformed(#[source] SecretError),

    #[error("failed to encode entry: {0}")]
    Encode(#[source] SecretError),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Encryption errors.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor encoding failed: {0}")]
    ArmorFailed(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}

/// Secret document errors.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("content is not valid UTF-8")]
    NotUtf8,

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[source] serde_yaml::Error),

    #[error("YAML document is not a mapping")]
    NotAMapping,

    #[error("field key cannot be empty")]
    EmptyKey,

    #[error("'{0}' is a reserved field")]
    ReservedKey(String),

    #[error("body is free text, not YAML")]
    NotStructured,

    #[error("failed to encode YAML: {0}")]
    Encode(#[source] serde_yaml::Error),
}
