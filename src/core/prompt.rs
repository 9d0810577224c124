//! Interactive collaborators.
//!
//! Traits for everything that needs a live user: terminal prompts and the
//! external editor. Terminal-backed implementations live in
//! `cli::terminal`; tests script them.

use std::io;

use zeroize::Zeroizing;

/// Terminal prompts.
///
/// An `Interrupted` I/O error means the user cancelled the prompt.
pub trait Prompt {
    /// Ask for a line of text, echoed as typed.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal cannot be read.
    fn ask_string(&self, prompt: &str, default: &str) -> io::Result<String>;

    /// Ask for a password for `name` with masked input, entered twice.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal cannot be read or the two
    /// entries never match.
    fn ask_password(&self, name: &str) -> io::Result<Zeroizing<String>>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal cannot be read.
    fn ask_confirmation(&self, message: &str) -> io::Result<bool>;
}

/// An external text editor.
pub trait Editor {
    /// Open `initial` in the editor and return what the user saved.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the editor cannot be started, exits
    /// unsuccessfully, or its output cannot be read back.
    fn edit(&self, initial: &[u8]) -> io::Result<Vec<u8>>;
}
