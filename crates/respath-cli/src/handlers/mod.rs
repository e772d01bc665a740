//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - A pure `render` function builds the output so it can be tested
//! - No resolution logic of their own; everything goes through the manager

pub mod candidates;
pub mod locales;
pub mod paths;
pub mod resolve;
