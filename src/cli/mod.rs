//! Command-line interface.

pub mod completions;
pub mod init;
pub mod insert;
pub mod output;
pub mod show;
pub mod terminal;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::store_root;
use crate::core::constants::STORE_DIR_ENV;
use crate::core::insert::{Flags, InsertRequest};

/// Cubby - a small encrypted store for passwords and credentials.
#[derive(Parser)]
#[command(
    name = "cubby",
    about = "A small encrypted store for passwords and credentials",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store directory (default: ~/.cubby)
    #[arg(long, global = true, env = STORE_DIR_ENV)]
    pub dir: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a new store
    Init {
        /// Your name (used as recipient identifier)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Insert a new entry or set one of its fields
    #[command(after_help = "Piped input replaces the whole entry, or sets the field when a key is given.")]
    Insert {
        /// Entry name (e.g., web/github)
        name: Option<String>,
        /// Field to set instead of the whole entry
        key: Option<String>,
        /// Echo the password while typing it
        #[arg(short, long)]
        echo: bool,
        /// Compose the entry in $EDITOR
        #[arg(short, long)]
        multiline: bool,
        /// Overwrite without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Print an entry or one of its fields
    Show {
        /// Entry name
        name: String,
        /// Field to print
        key: Option<String>,
        /// Output the fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, dir: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init { name } => init::execute(&store_root(dir)?, name),
        Insert {
            name,
            key,
            echo,
            multiline,
            force,
        } => {
            let request = InsertRequest::new(
                name,
                key,
                Flags {
                    echo,
                    multiline,
                    force,
                },
            )?;
            insert::execute(&store_root(dir)?, &request)
        }
        Show { name, key, json } => show::execute(&store_root(dir)?, &name, key.as_deref(), json),
        Completions { shell } => completions::execute(shell),
    }
}
