//! Cubby - a small encrypted store for passwords and credentials.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create a store
//! │   ├── insert        # Insert entries and fields
//! │   ├── show          # Print entries
//! │   ├── terminal      # dialoguer prompts, $EDITOR, audit output
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # config.toml management
//!     ├── cipher/       # age encryption
//!     ├── identity      # Store private key
//!     ├── input         # Piped stdin detection
//!     ├── insert        # Insert state machine
//!     ├── prompt        # Prompt and Editor traits
//!     ├── secret        # Entry document model
//!     ├── store/        # Store trait and filesystem store
//!     └── audit         # Password strength checks
//! ```
//!
//! # Entry format
//!
//! The first line of an entry is its password. An optional body follows:
//! either `---` and a YAML mapping of fields, or free text.
//!
//! ```text
//! hunter2
//! ---
//! user: alice
//! url: github.com
//! ```

pub mod cli;
pub mod core;
pub mod error;
