//! Settings domain types and validation.
//!
//! The resource manager only ever reads one field from the settings store:
//! the selected language. The store itself lives with the application; this
//! module provides the domain type, JSON loading and a shared handle that
//! can be read from the resolver while the application updates it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::locale::LocaleId;

/// Application settings relevant to resource lookup.
///
/// All fields are optional to support partial files and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Selected language (locale identifier), e.g. `"french"`.
    pub language: Option<String>,
}

impl Settings {
    /// Create settings with an explicit language selected.
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }

    /// Get the effective locale (with default fallback).
    ///
    /// A missing or blank language selects [`crate::DEFAULT_LOCALE`].
    pub fn effective_language(&self) -> LocaleId {
        match self.language.as_deref().map(str::trim) {
            Some(lang) if !lang.is_empty() => LocaleId::new(lang),
            _ => LocaleId::default_locale(),
        }
    }

    /// Load settings from a JSON file and validate them.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let settings: Self = serde_json::from_str(&raw).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref language) = other.language {
            self.language.clone_from(language);
        }
    }
}

/// Partial settings update.
///
/// - `None` = don't change this field
/// - `Some(None)` = reset the field
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub language: Option<Option<String>>,
}

/// Settings loading and validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Failed to parse settings file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Language cannot be empty")]
    EmptyLanguage,

    #[error("Language {0:?} is not a valid locale identifier")]
    InvalidLanguage(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(language) = settings.language.as_deref() {
        let trimmed = language.trim();
        if trimmed.is_empty() {
            return Err(SettingsError::EmptyLanguage);
        }
        if !LocaleId::is_valid(trimmed) {
            return Err(SettingsError::InvalidLanguage(language.to_string()));
        }
    }

    Ok(())
}

/// Cloneable handle to the process-wide settings store.
///
/// The application keeps one clone for updates; the resource manager reads
/// the current language through [`crate::ports::LocaleSource`].
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<Settings>>,
}

impl SharedSettings {
    /// Wrap `settings` as given. Unlike [`Self::update`] this does not run
    /// [`validate_settings`]; callers holding untrusted input should.
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Copy of the current settings.
    pub fn snapshot(&self) -> Settings {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply a partial update after validating the merged result.
    ///
    /// On validation failure the stored settings are left untouched.
    pub fn update(&self, update: &SettingsUpdate) -> Result<Settings, SettingsError> {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut next = guard.clone();
        next.merge(update);
        validate_settings(&next)?;
        *guard = next.clone();
        Ok(next)
    }
}
