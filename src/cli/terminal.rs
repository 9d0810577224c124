//! Terminal-backed collaborators for the insert flow.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use dialoguer::{Confirm, Input, Password};
use tempfile::NamedTempFile;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::audit::{self, PasswordAudit};
use crate::core::constants::PASSWORD_ATTEMPTS;
use crate::core::insert::Session;
use crate::core::prompt::{Editor, Prompt};

/// Editors tried when neither `$VISUAL` nor `$EDITOR` is set.
const FALLBACK_EDITORS: &[&str] = &["vi", "nano"];

/// Describe the current terminal session.
pub fn session() -> Session {
    Session {
        interactive: io::stdout().is_terminal(),
        editor: env::var("EDITOR").ok(),
    }
}

fn dialog_err(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
    }
}

fn no_terminal(what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotConnected,
        format!("cannot ask for {} without a terminal", what),
    )
}

/// Prompts through `dialoguer`.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl Prompt for TerminalPrompt {
    fn ask_string(&self, prompt: &str, default: &str) -> io::Result<String> {
        if !self.interactive {
            return Err(no_terminal("input"));
        }

        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(dialog_err)
    }

    fn ask_password(&self, name: &str) -> io::Result<Zeroizing<String>> {
        if !self.interactive {
            return Err(no_terminal("a password"));
        }

        for attempt in 1..=PASSWORD_ATTEMPTS {
            let first = Zeroizing::new(
                Password::new()
                    .with_prompt(format!("Enter password for {}", output::key(name)))
                    .allow_empty_password(true)
                    .interact()
                    .map_err(dialog_err)?,
            );
            let second = Zeroizing::new(
                Password::new()
                    .with_prompt(format!("Retype password for {}", output::key(name)))
                    .allow_empty_password(true)
                    .interact()
                    .map_err(dialog_err)?,
            );

            if *first == *second {
                return Ok(first);
            }

            debug!(attempt, "password entries did not match");
            output::warn("passwords do not match");
        }

        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("passwords did not match after {} attempts", PASSWORD_ATTEMPTS),
        ))
    }

    fn ask_confirmation(&self, message: &str) -> io::Result<bool> {
        if !self.interactive {
            return Ok(true);
        }

        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(dialog_err)
    }
}

/// Pick the editor command: `$VISUAL`, then `$EDITOR`, then the first
/// fallback editor `find` locates.
fn resolve_editor<F>(
    visual: Option<OsString>,
    editor: Option<OsString>,
    find: F,
) -> io::Result<OsString>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    if let Some(program) = [visual, editor]
        .into_iter()
        .flatten()
        .find(|p| !p.is_empty())
    {
        return Ok(program);
    }

    FALLBACK_EDITORS
        .iter()
        .find_map(|&name| find(name))
        .map(OsString::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no editor found: set $EDITOR"))
}

/// Split an editor command into program and arguments.
///
/// A command naming an existing file is run as is, spaces included;
/// anything else is split on whitespace (e.g. `code --wait`).
fn editor_command(command: &OsStr) -> io::Result<(OsString, Vec<String>)> {
    if Path::new(command).is_file() {
        return Ok((command.to_os_string(), Vec::new()));
    }

    let command = command.to_string_lossy();
    let mut parts = command.split_whitespace();
    let bin = parts
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "empty editor command"))?;

    Ok((OsString::from(bin), parts.map(str::to_string).collect()))
}

/// The user's text editor, run on a temporary file.
#[derive(Debug, Default)]
pub struct ExternalEditor;

impl Editor for ExternalEditor {
    fn edit(&self, initial: &[u8]) -> io::Result<Vec<u8>> {
        let command = resolve_editor(env::var_os("VISUAL"), env::var_os("EDITOR"), |name| {
            which::which(name).ok()
        })?;
        let (program, args) = editor_command(&command)?;

        let mut file = NamedTempFile::with_prefix("cubby-")?;
        file.write_all(initial)?;
        file.as_file().sync_all()?;

        debug!(editor = ?program, "launching editor");

        let status = process::Command::new(&program)
            .args(&args)
            .arg(file.path())
            .status()?;

        if !status.success() {
            return Err(io::Error::other(format!("editor exited with {}", status)));
        }

        fs::read(file.path())
    }
}

/// Prints password weaknesses as warnings.
#[derive(Debug, Clone, Copy)]
pub struct TerminalAudit {
    min_length: usize,
}

impl TerminalAudit {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl PasswordAudit for TerminalAudit {
    fn report_password_strength(&self, password: &str) {
        for weakness in audit::check(password, self.min_length) {
            output::warn(&format!("weak password: {}", weakness));
        }
    }
}
