//! Command-line interface for llmgate.
//!
//! `llmgate serve` runs the HTTP gateway; the `models` and `keys` command
//! groups edit the registry documents directly through the same core
//! services the server uses.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, load_config};
pub use commands::{Commands, KeysCommand, ModelsCommand};
pub use parser::Cli;
