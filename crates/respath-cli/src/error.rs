//! CLI-specific error types and mappings.
//!
//! Resolution itself never fails; errors only arise while building the
//! manager from files and flags.

use respath_core::{PathError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Settings file could not be loaded.
    #[error("Settings error: {0}")]
    Settings(String),

    /// Layout file could not be loaded.
    #[error("Layout error: {0}")]
    Layout(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Settings(_) | Self::Layout(_) => 78, // EX_CONFIG
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::UnknownPlatform(_) => Self::Arguments(err.to_string()),
            other => Self::Layout(other.to_string()),
        }
    }
}
