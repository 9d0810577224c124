//! Show command - print a decrypted entry.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;
use zeroize::Zeroizing;

use crate::core::constants::{NOTES_FIELD, PASSWORD_FIELD};
use crate::core::store::{Filesystem, Store};
use crate::error::{Error, Result, StoreError};

/// Print an entry, one of its fields, or its fields as JSON.
///
/// The JSON object holds `password`, each field, and `notes` when the body
/// is free text.
pub fn execute(root: &Path, name: &str, key: Option<&str>, json: bool) -> Result<()> {
    let store = Filesystem::open(root)?;
    let secret = store.get(name)?;

    info!("Showing: {}", name);

    let out = if json {
        let mut fields = serde_json::Map::new();
        fields.insert(PASSWORD_FIELD.to_string(), secret.password().into());
        for k in secret.keys() {
            if let Some(v) = secret.value(&k) {
                fields.insert(k, v.into());
            }
        }
        if let Some(notes) = secret.notes() {
            fields.insert(NOTES_FIELD.to_string(), notes.into());
        }
        let mut text = serde_json::to_string_pretty(&fields)
            .map_err(|e| Error::io("failed to encode JSON", e.into()))?;
        text.push('\n');
        Zeroizing::new(text.into_bytes())
    } else if let Some(key) = key {
        let value = secret.value(key).ok_or_else(|| StoreError::FieldNotFound {
            name: name.to_string(),
            key: key.to_string(),
        })?;
        Zeroizing::new(format!("{}\n", value).into_bytes())
    } else {
        Zeroizing::new(secret.to_bytes().map_err(StoreError::Encode)?)
    };

    io::stdout()
        .write_all(&out)
        .map_err(|e| Error::io("failed to write to stdout", e))
}
