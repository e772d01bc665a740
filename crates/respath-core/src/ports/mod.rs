//! Port definitions (trait abstractions) for external capabilities.
//!
//! The resolver consumes three capabilities it does not implement itself:
//! the current locale from the settings store, directory enumeration, and
//! filesystem probing. Default filesystem-backed implementations live next
//! to each trait; tests substitute their own.
//!
//! # Design Rules
//!
//! - Every port is synchronous and `Send + Sync`
//! - Ports never return errors; absence is the only failure mode

pub mod entry_lister;
pub mod file_probe;
pub mod locale_source;

pub use entry_lister::{EntryLister, GlobLister};
pub use file_probe::{FileProbe, FsProbe};
pub use locale_source::{FixedLocale, LocaleSource};
