//! Init command - create a new store.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::store::Filesystem;
use crate::error::Result;

/// Create a store at `root` with the caller as first recipient.
pub fn execute(root: &Path, name: Option<String>) -> Result<()> {
    let name = name.unwrap_or_else(whoami::username);

    info!("Initializing store for: {}", name);

    let store = Filesystem::init(root, &name)?;

    output::success(&format!("initialized {}", output::path(root.display())));
    output::kv("recipient:", &name);
    output::kv("public key:", store.identity().public_key());

    Ok(())
}
