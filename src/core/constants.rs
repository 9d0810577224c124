//! Constants used throughout cubby.
//!
//! Centralizes file names and defaults.

/// Store directory relative to HOME (~/.cubby).
pub const STORE_DIR: &str = ".cubby";

/// Environment variable overriding the store directory.
pub const STORE_DIR_ENV: &str = "CUBBY_DIR";

/// Configuration file name inside the store directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Private key file name inside the store directory.
pub const IDENTITY_FILE: &str = "identity.key";

/// Directory holding encrypted entries.
pub const ENTRIES_DIR: &str = "store";

/// Extension of encrypted entry files.
pub const ENTRY_EXT: &str = "age";

/// Change journal file name.
pub const HISTORY_FILE: &str = "history.log";

/// Field name that always refers to the primary line of a secret.
pub const PASSWORD_FIELD: &str = "password";

/// JSON key for a free-text body in `show --json`.
pub const NOTES_FIELD: &str = "notes";

/// Separator line introducing a YAML body.
pub const YAML_SEPARATOR: &str = "---";

/// Default minimum password length for strength warnings.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 10;

/// Attempts allowed for the enter/retype password prompt.
pub const PASSWORD_ATTEMPTS: usize = 3;

/// Commit message for single-field updates.
pub const MSG_FIELD: &str = "Inserted YAML value from STDIN";

/// Commit message for full documents read from stdin.
pub const MSG_STDIN: &str = "Read secret from STDIN";

/// Commit message for prompted passwords.
pub const MSG_PASSWORD: &str = "Inserted user supplied password";
