//! Cubby - a small encrypted store for passwords and credentials.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cubby::cli::output;
use cubby::cli::{execute, Cli};
use cubby::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("CUBBY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cubby=debug")
        } else {
            EnvFilter::new("cubby=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.dir) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized) => Some("run: cubby init"),
            Error::Store(StoreError::NoPrivateKey(_)) => Some("run: cubby init"),
            Error::Usage(_) => Some("see: cubby insert --help"),
            _ => None,
        };

        match &e {
            Error::Aborted => output::warn(&e.to_string()),
            _ => output::error(&e.to_string()),
        }
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
