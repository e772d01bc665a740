//! Locale identifiers.
//!
//! A locale identifier names a translation pack on disk (`lang/<id>/`).
//! Identifiers are short lowercase strings such as `"french"`; the only hard
//! requirement is that they are usable as a single path segment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The locale that always exists, whatever is installed on disk.
pub const DEFAULT_LOCALE: &str = "english";

/// Identifier of a locale pack, e.g. `"french"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Create a locale identifier from any string-like value.
    ///
    /// No validation is performed here; use [`LocaleId::is_valid`] on
    /// untrusted input (settings files, command-line flags). The resource
    /// manager substitutes the default locale for invalid ids at lookup.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier of [`DEFAULT_LOCALE`].
    pub fn default_locale() -> Self {
        Self::new(DEFAULT_LOCALE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether `id` can be used as a single locale path segment.
    ///
    /// Rejects empty strings, `.`/`..`, and anything containing a path
    /// separator, a drive colon or a NUL byte. Absolute values such as
    /// `/tmp` would otherwise replace the whole root when joined.
    pub fn is_valid(id: &str) -> bool {
        !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\', ':', '\0'])
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocaleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for LocaleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
