//! Input validation for cubby operations.
//!
//! Validates entry names before they are turned into store paths.

use crate::error::StoreError;

/// Validate an entry name.
///
/// Entry names are relative, slash-separated paths:
/// - Cannot be empty or start with `/`
/// - No empty, `.` or `..` components
/// - No backslashes or NUL bytes
///
/// # Errors
///
/// Returns `StoreError::InvalidName` if the name is invalid.
pub fn validate_entry_name(name: &str) -> Result<(), StoreError> {
    let invalid = |reason: &str| StoreError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("cannot be empty"));
    }
    if name.starts_with('/') {
        return Err(invalid("must be relative"));
    }
    if name.contains('\\') || name.contains('\0') {
        return Err(invalid("contains a backslash or NUL byte"));
    }

    for component in name.split('/') {
        match component {
            "" => return Err(invalid("contains an empty path component")),
            "." | ".." => return Err(invalid("cannot contain '.' or '..' components")),
            _ => {}
        }
    }

    Ok(())
}
