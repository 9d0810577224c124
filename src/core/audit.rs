//! Password strength checks.
//!
//! Domain types for reporting weak passwords. Checks are advisory: they
//! never stop an entry from being stored.

use std::fmt;

/// Passwords rejected on sight by most breach corpora.
const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "12345678",
    "123456789",
    "1234567890",
    "abc123",
    "admin",
    "changeme",
    "dragon",
    "football",
    "iloveyou",
    "letmein",
    "monkey",
    "password",
    "password1",
    "qwerty",
    "qwertyuiop",
    "secret",
    "sunshine",
    "trustno1",
    "welcome",
];

/// Severity level for a weakness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Worth knowing, not urgent.
    Low,
    /// Noticeably easier to guess.
    Medium,
    /// Trivially guessable.
    High,
}

/// A single finding from a password check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weakness {
    /// Nothing was entered.
    Empty,
    /// Shorter than the configured minimum.
    TooShort { length: usize, minimum: usize },
    /// Uses only one class of characters (e.g. only digits).
    SingleClass,
    /// One character repeated throughout.
    Repeated,
    /// Appears in the common-password list.
    Common,
}

impl Weakness {
    /// How bad this weakness is.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Empty | Self::Common | Self::Repeated => Severity::High,
            Self::TooShort { .. } => Severity::Medium,
            Self::SingleClass => Severity::Low,
        }
    }
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "password is empty"),
            Self::TooShort { length, minimum } => write!(
                f,
                "password is too short ({} characters, at least {} recommended)",
                length, minimum
            ),
            Self::SingleClass => write!(f, "password uses only one kind of character"),
            Self::Repeated => write!(f, "password is a single repeated character"),
            Self::Common => write!(f, "password is a commonly used password"),
        }
    }
}

/// Receives a freshly entered password before it is stored.
///
/// Implementations report weaknesses however they like; nothing is returned.
pub trait PasswordAudit {
    /// Report on the strength of `password`.
    fn report_password_strength(&self, password: &str);
}

/// Check a password and return its weaknesses, most severe first.
pub fn check(password: &str, min_length: usize) -> Vec<Weakness> {
    if password.is_empty() {
        return vec![Weakness::Empty];
    }

    let mut weaknesses = Vec::new();

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        weaknesses.push(Weakness::Common);
    }

    let mut chars = password.chars();
    if let Some(first) = chars.next() {
        if password.chars().count() > 1 && chars.all(|c| c == first) {
            weaknesses.push(Weakness::Repeated);
        }
    }

    let length = password.chars().count();
    if length < min_length {
        weaknesses.push(Weakness::TooShort {
            length,
            minimum: min_length,
        });
    }

    if character_classes(password) == 1 {
        weaknesses.push(Weakness::SingleClass);
    }

    weaknesses.sort_by(|a, b| b.severity().cmp(&a.severity()));
    weaknesses
}

fn character_classes(password: &str) -> usize {
    let lower = password.chars().any(|c| c.is_lowercase());
    let upper = password.chars().any(|c| c.is_uppercase());
    let digit = password.chars().any(|c| c.is_ascii_digit());
    let other = password.chars().any(|c| !c.is_alphanumeric());

    [lower, upper, digit, other].iter().filter(|&&b| b).count()
}
