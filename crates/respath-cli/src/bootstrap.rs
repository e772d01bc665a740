//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the CLI wires concrete ports into a
//! [`ResourceManager`]:
//! - Settings store (file or `--language`) as the locale source
//! - Layout (file or defaults)
//! - Platform strategy (flag or build target)

use std::path::PathBuf;
use std::sync::Arc;

use respath_core::{
    DataLayout, LocaleId, Platform, ResourceManager, Settings, SharedSettings,
};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings_path: Option<PathBuf>,
    pub layout_path: Option<PathBuf>,
    pub language: Option<String>,
    pub platform: Platform,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            settings_path: cli.settings.clone(),
            layout_path: cli.layout.clone(),
            language: cli.language.clone(),
            platform: cli.platform.unwrap_or_else(Platform::current),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            settings_path: None,
            layout_path: None,
            language: None,
            platform: Platform::current(),
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub manager: ResourceManager,
    pub layout: DataLayout,
    pub platform: Platform,
}

/// Build the resource manager described by `config`.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let layout = match &config.layout_path {
        Some(path) => DataLayout::load(path)?,
        None => DataLayout::default(),
    };

    let mut settings = match &config.settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(language) = &config.language {
        if !LocaleId::is_valid(language) {
            return Err(CliError::Arguments(format!(
                "{language:?} is not a valid locale identifier"
            )));
        }
        settings.language = Some(language.clone());
    }

    debug!(platform = %config.platform, language = ?settings.language, "Bootstrapping resource manager");

    let manager = ResourceManager::with_platform(
        config.platform,
        &layout,
        Arc::new(SharedSettings::new(settings)),
    );

    Ok(CliContext {
        manager,
        layout,
        platform: config.platform,
    })
}
