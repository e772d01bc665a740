//! Platform- and locale-aware resource path resolution.
//!
//! Given a logical name such as `"tiles.pbm"` or `"lang/"`, a
//! [`ResourceManager`] returns the first existing path among the search roots
//! of the current platform, checking the selected locale's pack before the
//! shared copy in each root. It also reports which locale packs are
//! installed.
//!
//! ```no_run
//! use std::sync::Arc;
//! use respath_core::{DataLayout, Platform, ResourceManager, Settings, SharedSettings};
//!
//! let settings = SharedSettings::new(Settings::with_language("french"));
//! let manager = ResourceManager::with_platform(
//!     Platform::current(),
//!     &DataLayout::default(),
//!     Arc::new(settings),
//! );
//! let font = manager.resolve("font_1.fnt");
//! println!("{}", font.path().display());
//! ```

#![deny(unused_crate_dependencies)]

pub mod locale;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use locale::{DEFAULT_LOCALE, LocaleId};
pub use paths::{
    BUNDLED_LOCALES, Candidate, DataLayout, HostDirs, LocaleCatalog, PathError, Platform,
    Resolution, SearchPlan, SearchRoot, Tier, validate_layout,
};
pub use ports::{EntryLister, FileProbe, FixedLocale, FsProbe, GlobLister, LocaleSource};
pub use services::{PathResolver, ResourceDeps, ResourceManager, discover_locales};
pub use settings::{Settings, SettingsError, SettingsUpdate, SharedSettings, validate_settings};
