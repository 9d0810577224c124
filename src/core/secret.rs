//! Secret document type.
//!
//! A secret is a primary line (the password) followed by an optional body.
//! A body that opens with a `---` line is a YAML mapping of additional
//! fields; any other body is kept verbatim as free-text notes.
//!
//! ```text
//! hunter2
//! ---
//! user: alice
//! url: https://example.com
//! ```

use serde_yaml::{Mapping, Value};
use zeroize::Zeroize;

use crate::core::constants::{PASSWORD_FIELD, YAML_SEPARATOR};
use crate::error::SecretError;

/// A decrypted secret: password plus fields or notes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Secret {
    password: String,
    body: Body,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Body {
    #[default]
    Empty,
    Fields(Mapping),
    Notes(String),
}

impl Secret {
    /// Create an empty secret: no password, no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a secret whose primary line is `password`
    ///
    /// The password is expected to be a single line.
    pub fn from_password(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            body: Body::Empty,
        }
    }

    /// Parse a complete secret document
    ///
    /// # Errors
    ///
    /// Returns `SecretError::NotUtf8` for non-UTF-8 input,
    /// `SecretError::InvalidYaml` if a YAML body does not decode, and
    /// `SecretError::NotAMapping` if it decodes to something other than a
    /// mapping.
    pub fn parse(bytes: &[u8]) -> Result<Self, SecretError> {
        let text = std::str::from_utf8(bytes).map_err(|_| SecretError::NotUtf8)?;
        let (password, body) = text.split_once('\n').unwrap_or((text, ""));

        Ok(Self {
            password: password.to_string(),
            body: parse_body(body)?,
        })
    }

    /// Return this secret with field `key` set to `value`
    ///
    /// Existing fields are kept; an existing `key` is overwritten in place.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::EmptyKey` or `SecretError::ReservedKey` for keys
    /// that cannot name a field, and `SecretError::NotStructured` if the body
    /// is free text.
    pub fn with_field(mut self, key: &str, value: &str) -> Result<Self, SecretError> {
        if key.trim().is_empty() {
            return Err(SecretError::EmptyKey);
        }
        if key == PASSWORD_FIELD {
            return Err(SecretError::ReservedKey(key.to_string()));
        }

        let key = Value::String(key.to_string());
        let value = Value::String(value.to_string());
        match &mut self.body {
            Body::Notes(_) => return Err(SecretError::NotStructured),
            Body::Fields(fields) => {
                fields.insert(key, value);
            }
            Body::Empty => {
                let mut fields = Mapping::new();
                fields.insert(key, value);
                self.body = Body::Fields(fields);
            }
        }

        Ok(self)
    }

    /// Serialize back into a document `parse` accepts
    ///
    /// # Errors
    ///
    /// Returns `SecretError::Encode` if the fields cannot be written as YAML.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SecretError> {
        let mut out = String::with_capacity(self.password.len() + 1);
        out.push_str(&self.password);
        out.push('\n');

        match &self.body {
            Body::Empty => {}
            Body::Fields(fields) => {
                out.push_str(YAML_SEPARATOR);
                out.push('\n');
                out.push_str(&serde_yaml::to_string(fields).map_err(SecretError::Encode)?);
            }
            Body::Notes(notes) => out.push_str(notes),
        }

        Ok(out.into_bytes())
    }

    /// Primary line
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Look up a field; `password` resolves to the primary line
    pub fn value(&self, key: &str) -> Option<String> {
        if key == PASSWORD_FIELD {
            return Some(self.password.clone());
        }
        match &self.body {
            Body::Fields(fields) => fields.get(key).map(render_value),
            _ => None,
        }
    }

    /// Field names in document order
    pub fn keys(&self) -> Vec<String> {
        match &self.body {
            Body::Fields(fields) => fields
                .keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Free-text body, if the body is not structured
    pub fn notes(&self) -> Option<&str> {
        match &self.body {
            Body::Notes(notes) => Some(notes),
            _ => None,
        }
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.password.zeroize();
        if let Body::Notes(notes) = &mut self.body {
            notes.zeroize();
        }
    }
}

fn parse_body(body: &str) -> Result<Body, SecretError> {
    if body.trim().is_empty() {
        return Ok(Body::Empty);
    }

    let (first, rest) = body.split_once('\n').unwrap_or((body, ""));
    if first.trim_end() != YAML_SEPARATOR {
        return Ok(Body::Notes(body.to_string()));
    }
    if rest.trim().is_empty() {
        return Ok(Body::Empty);
    }

    match serde_yaml::from_str::<Value>(rest).map_err(SecretError::InvalidYaml)? {
        Value::Null => Ok(Body::Empty),
        Value::Mapping(fields) if fields.is_empty() => Ok(Body::Empty),
        Value::Mapping(fields) => Ok(Body::Fields(fields)),
        _ => Err(SecretError::NotAMapping),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
