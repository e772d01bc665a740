//! Path-related error types.
//!
//! Resolution itself never fails; these errors describe why a search root
//! could not be built or why a layout file was rejected.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building search roots or loading a layout.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Could not determine the per-user application support directory.
    #[error("Cannot determine preference directory")]
    NoPrefDir,

    /// Failed to read or parse a layout file.
    #[error("Failed to load layout file {path}: {reason}")]
    LayoutFile { path: PathBuf, reason: String },

    /// A layout field that names a path segment was empty.
    #[error("Layout field `{0}` cannot be empty")]
    EmptyLayoutField(&'static str),

    /// An unknown platform name was requested.
    #[error("Unknown platform {0:?} (expected linux, macos, bundled or generic)")]
    UnknownPlatform(String),
}
