//! Test support utilities for cubby integration tests.
//!
//! Provides an isolated store per test and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// The store lives in `<home>/.cubby`. Child processes get their own
/// `HOME`, so tests can run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new environment with no store.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create an environment with an initialized store.
    pub fn init(name: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(name);
        assert!(
            output.status.success(),
            "Failed to initialize store: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized store holding the given documents.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let t = Self::init("test-user");
        for (name, doc) in entries {
            let output = t.insert_piped(&[name], doc.as_bytes());
            assert!(
                output.status.success(),
                "Failed to insert {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Store root.
    pub fn root(&self) -> PathBuf {
        self.home.path().join(".cubby")
    }

    /// Encrypted file of an entry.
    pub fn entry_file(&self, name: &str) -> PathBuf {
        self.root().join("store").join(format!("{}.age", name))
    }

    /// Contents of the change journal, empty if none was written.
    pub fn history(&self) -> String {
        std::fs::read_to_string(self.root().join("history.log")).unwrap_or_default()
    }
}
