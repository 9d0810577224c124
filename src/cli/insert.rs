//! Insert command.
//!
//! Wires the insert state machine to stdin, the terminal and the
//! filesystem store.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::cli::terminal::{self, ExternalEditor, TerminalAudit, TerminalPrompt};
use crate::core::input::Stdin;
use crate::core::insert::{Insert, InsertRequest};
use crate::core::store::Filesystem;
use crate::core::validation::validate_entry_name;
use crate::error::Result;

/// Insert an entry, or one field of it.
pub fn execute(root: &Path, request: &InsertRequest) -> Result<()> {
    validate_entry_name(request.name())?;

    let mut store = Filesystem::open(root)?;
    let session = terminal::session();

    info!("Inserting: {}", request.name());

    let prompt = TerminalPrompt::new(session.interactive);
    let editor = ExternalEditor;
    let audit = TerminalAudit::new(store.config().cubby.min_password_length);
    let mut stdin = Stdin;

    Insert::new(&mut store, &mut stdin, &prompt, &editor, &audit, session).run(request)?;

    match request.key() {
        Some(key) => output::success(&format!(
            "set {} of {}",
            output::key(key),
            output::key(request.name())
        )),
        None => output::success(&format!("inserted {}", output::key(request.name()))),
    }

    Ok(())
}
