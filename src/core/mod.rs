//! Core library components.
//!
//! Everything needed to insert and read entries without a terminal:
//! the secret document model, encryption, the store, and the insert
//! state machine with its collaborator traits.

pub mod audit;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod identity;
pub mod input;
pub mod insert;
pub mod prompt;
pub mod secret;
pub mod store;
pub mod types;
pub mod validation;
