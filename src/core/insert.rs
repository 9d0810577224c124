//! Insert orchestration.
//!
//! Decides where a new entry's content comes from and how it is merged into
//! the store. The branch is chosen by [`Plan::select`], a pure function of
//! the invocation's facts, and then carried out against injected
//! collaborators so the whole flow runs without a terminal.
//!
//! Priority, first match wins:
//!
//! | key | piped | force | multiline && interactive | mode          | overwrite check |
//! |-----|-------|-------|--------------------------|---------------|-----------------|
//! | yes | any   | any   | any                      | `SingleField` | no              |
//! | no  | yes   | any   | any                      | `Document`    | no              |
//! | no  | no    | any   | yes                      | `Editor`      | unless forced   |
//! | no  | no    | any   | no                       | `Password`    | unless forced   |

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::audit::PasswordAudit;
use crate::core::constants::{MSG_FIELD, MSG_PASSWORD, MSG_STDIN};
use crate::core::input::{self, InputSource};
use crate::core::prompt::{Editor, Prompt};
use crate::core::secret::Secret;
use crate::core::store::{Confirm, Store};
use crate::error::{Error, Result, SecretError, StoreError, Target};

/// Correct invocation, shown on usage errors.
pub const USAGE: &str = "cubby insert <name> [<key>]";

/// Command-line switches for `insert`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Read the password with a plain, echoed prompt.
    pub echo: bool,
    /// Compose the whole entry in an editor.
    pub multiline: bool,
    /// Skip every confirmation.
    pub force: bool,
}

/// A validated insert invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertRequest {
    name: String,
    key: Option<String>,
    flags: Flags,
}

impl InsertRequest {
    /// Build a request from raw arguments.
    ///
    /// An empty key is treated as no key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Usage` if the name is missing or empty.
    pub fn new(name: Option<String>, key: Option<String>, flags: Flags) -> Result<Self> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::Usage(USAGE.to_string()))?;

        Ok(Self {
            name,
            key: key.filter(|k| !k.is_empty()),
            flags,
        })
    }

    /// Entry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field key, if one field is targeted.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Switches.
    pub fn flags(&self) -> Flags {
        self.flags
    }
}

/// Facts about the environment an insert runs in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// A user is attached to the terminal.
    pub interactive: bool,
    /// Value of `$EDITOR`, used only to describe editor-made changes.
    pub editor: Option<String>,
}

impl Session {
    fn editor_label(&self) -> &str {
        match self.editor.as_deref() {
            Some(editor) if !editor.is_empty() => editor,
            _ => "editor",
        }
    }
}

/// Switches and session facts the branch choice depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decision {
    pub echo: bool,
    pub multiline: bool,
    pub interactive: bool,
    pub force: bool,
}

/// Where the entry's content comes from, with the input each branch needs.
///
/// `K` is the field key and `V` the piped bytes; the table can be checked
/// with `()` for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode<K, V> {
    /// Patch one field; the value is piped, or prompted when `None`.
    SingleField { key: K, value: Option<V> },
    /// Replace the entry with a document read from stdin.
    Document(V),
    /// Compose the entry in the editor.
    Editor,
    /// Prompt for a password.
    Password { echo: bool },
}

impl<K, V> InputMode<K, V> {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleField { .. } => "single-field",
            Self::Document(_) => "document",
            Self::Editor => "editor",
            Self::Password { .. } => "password",
        }
    }
}

/// The selected branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<K, V> {
    pub mode: InputMode<K, V>,
    /// Ask before replacing an existing entry.
    pub check_overwrite: bool,
}

impl<K, V> Plan<K, V> {
    /// Select the branch for a key, piped content and switches.
    pub fn select(key: Option<K>, piped: Option<V>, d: Decision) -> Self {
        if let Some(key) = key {
            return Self {
                mode: InputMode::SingleField { key, value: piped },
                check_overwrite: false,
            };
        }
        if let Some(content) = piped {
            return Self {
                mode: InputMode::Document(content),
                check_overwrite: false,
            };
        }

        let mode = if d.multiline && d.interactive {
            InputMode::Editor
        } else {
            InputMode::Password { echo: d.echo }
        };

        Self {
            mode,
            check_overwrite: !d.force,
        }
    }
}

/// Whether an entry may be written: always when forced or new, otherwise
/// only if the user agrees to overwrite it.
///
/// # Errors
///
/// Returns `Error::Cancelled` if the question is interrupted, or
/// `Error::Io` if it cannot be asked.
pub fn should_proceed(
    store: &dyn Store,
    prompt: &dyn Prompt,
    name: &str,
    forced: bool,
) -> Result<bool> {
    if forced || !store.exists(name) {
        return Ok(true);
    }
    prompt
        .ask_confirmation(&format!(
            "An entry already exists for {}. Overwrite it?",
            name
        ))
        .map_err(|e| Error::io("failed to ask for confirmation", e))
}

/// A confirmation that could not be asked is a terminal failure, not a
/// write failure.
fn write_error(target: Target, source: StoreError) -> Error {
    match source {
        StoreError::Confirm(e) => Error::io("failed to ask for confirmation", e),
        source => Error::StoreWrite { target, source },
    }
}

/// The insert state machine, wired to its collaborators.
pub struct Insert<'a> {
    store: &'a mut dyn Store,
    input: &'a mut dyn InputSource,
    prompt: &'a dyn Prompt,
    editor: &'a dyn Editor,
    audit: &'a dyn PasswordAudit,
    session: Session,
}

impl<'a> Insert<'a> {
    /// Wire up an insert.
    pub fn new(
        store: &'a mut dyn Store,
        input: &'a mut dyn InputSource,
        prompt: &'a dyn Prompt,
        editor: &'a dyn Editor,
        audit: &'a dyn PasswordAudit,
        session: Session,
    ) -> Self {
        Self {
            store,
            input,
            prompt,
            editor,
            audit,
            session,
        }
    }

    /// Run one insert to completion.
    ///
    /// # Errors
    ///
    /// Returns `Error::Aborted` if the user declines to overwrite,
    /// `Error::Cancelled` if a prompt is interrupted, or the error of
    /// whichever step failed. Nothing is written on error.
    pub fn run(&mut self, request: &InsertRequest) -> Result<()> {
        let name = request.name();
        let flags = request.flags();

        let piped = input::read_piped(&mut *self.input)?.map(Zeroizing::new);

        let plan = Plan::select(
            request.key(),
            piped,
            Decision {
                echo: flags.echo,
                multiline: flags.multiline,
                interactive: self.session.interactive,
                force: flags.force,
            },
        );
        debug!(
            name,
            mode = plan.mode.label(),
            check_overwrite = plan.check_overwrite,
            "insert plan selected"
        );

        let confirm = if flags.force {
            Confirm::Always
        } else {
            Confirm::Ask(self.prompt)
        };

        if plan.check_overwrite && !should_proceed(&*self.store, self.prompt, name, flags.force)? {
            info!(name, "overwrite declined");
            return Err(Error::Aborted);
        }

        match plan.mode {
            InputMode::SingleField { key, value } => self.insert_field(name, key, value),
            InputMode::Document(content) => self.insert_document(name, &content, confirm),
            InputMode::Editor => self.insert_from_editor(name, confirm),
            InputMode::Password { echo } => self.insert_password(name, echo, confirm),
        }
    }

    fn insert_field(
        &mut self,
        name: &str,
        key: &str,
        piped: Option<Zeroizing<Vec<u8>>>,
    ) -> Result<()> {
        let target = Target::field(name, key);

        let value = match piped {
            Some(bytes) => Zeroizing::new(String::from_utf8(bytes.to_vec()).map_err(|_| {
                Error::FieldSet {
                    target: target.clone(),
                    source: SecretError::NotUtf8,
                }
            })?),
            None => Zeroizing::new(
                self.prompt
                    .ask_string(&format!("{}:{}", name, key), "")
                    .map_err(|e| Error::io("failed to ask for user input", e))?,
            ),
        };

        let base = if self.store.exists(name) {
            self.store.get(name).map_err(|source| Error::StoreRead {
                target: target.clone(),
                source,
            })?
        } else {
            Secret::new()
        };

        let secret = base
            .with_field(key, &value)
            .map_err(|source| Error::FieldSet {
                target: target.clone(),
                source,
            })?;

        self.store
            .set(name, &secret, MSG_FIELD)
            .map_err(|source| write_error(target, source))?;

        info!(name, key, "field updated");
        Ok(())
    }

    fn insert_document(&mut self, name: &str, content: &[u8], confirm: Confirm<'_>) -> Result<()> {
        let target = Target::entry(name);

        let secret = Secret::parse(content).map_err(|source| Error::Parse {
            target: target.clone(),
            source,
        })?;

        self.store
            .set_confirm(name, &secret, MSG_STDIN, confirm)
            .map_err(|source| write_error(target, source))?;

        info!(name, "entry read from stdin");
        Ok(())
    }

    fn insert_from_editor(&mut self, name: &str, confirm: Confirm<'_>) -> Result<()> {
        let target = Target::entry(name);

        let content = Zeroizing::new(self.editor.edit(&[]).map_err(Error::Editor)?);
        let secret = Secret::parse(&content).map_err(|source| Error::Parse {
            target: target.clone(),
            source,
        })?;

        let message = format!("{} with {}", MSG_PASSWORD, self.session.editor_label());
        self.store
            .set_confirm(name, &secret, &message, confirm)
            .map_err(|source| write_error(target, source))?;

        info!(name, "entry composed in editor");
        Ok(())
    }

    fn insert_password(&mut self, name: &str, echo: bool, confirm: Confirm<'_>) -> Result<()> {
        let password = if echo {
            Zeroizing::new(
                self.prompt
                    .ask_string(&format!("Enter password for {}", name), "")
                    .map_err(|e| Error::io("failed to ask for password", e))?,
            )
        } else {
            self.prompt
                .ask_password(name)
                .map_err(|e| Error::io("failed to ask for password", e))?
        };

        let secret = Secret::from_password(password.as_str());
        self.audit.report_password_strength(secret.password());

        self.store
            .set_confirm(name, &secret, MSG_PASSWORD, confirm)
            .map_err(|source| write_error(Target::entry(name), source))?;

        info!(name, "password stored");
        Ok(())
    }
}
