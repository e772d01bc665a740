//! Command-line adapter for `respath-core`.
//!
//! The binary wires a [`respath_core::ResourceManager`] from command-line
//! options and optional settings/layout files, then prints what the
//! resolver sees. Useful for checking an install before launching the game.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
