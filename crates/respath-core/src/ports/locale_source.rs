//! Current-locale port.
//!
//! The settings store owns the selected language; the resolver only reads
//! it, once per resolution call.

use crate::locale::LocaleId;
use crate::settings::SharedSettings;

/// Source of the currently selected locale.
pub trait LocaleSource: Send + Sync {
    /// The locale to use for the next lookup.
    fn current_locale(&self) -> LocaleId;
}

/// A locale that never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub LocaleId);

impl FixedLocale {
    /// `locale` is not validated. An id failing [`LocaleId::is_valid`] is
    /// replaced by the default locale when the resource manager joins it.
    pub fn new(locale: impl Into<LocaleId>) -> Self {
        Self(locale.into())
    }
}

impl LocaleSource for FixedLocale {
    fn current_locale(&self) -> LocaleId {
        self.0.clone()
    }
}

impl LocaleSource for SharedSettings {
    fn current_locale(&self) -> LocaleId {
        self.snapshot().effective_language()
    }
}
