//! Type aliases for domain concepts.

/// An age public key string (starts with "age1...").
///
/// Used for encrypting entries for specific recipients.
pub type PublicKey = String;

/// A recipient name, as listed under `[recipients]` in the config.
pub type MemberName = String;
