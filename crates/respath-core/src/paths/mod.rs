//! Search roots, data layout and resolution results.
//!
//! This module describes *where* resources may live:
//! - Platform strategies producing ordered search roots
//! - The on-disk layout (`data/`, `lang/<locale>/`, `system.json`)
//! - The tagged result returned by every resolution
//!
//! # Design
//!
//! - Platform selection happens once, when a [`SearchPlan`] is built
//! - Undeterminable roots are skipped, never surfaced as errors
//! - Probing the filesystem is left to [`crate::services`]

mod error;
mod layout;
mod plan;
mod platform;
mod resolution;

// Error type
pub use error::PathError;

// Layout configuration
pub use layout::{DataLayout, validate_layout};

// Plans and platform strategies
pub use plan::{LocaleCatalog, SearchPlan, SearchRoot, Tier};
pub use platform::{BUNDLED_LOCALES, HostDirs, Platform};

// Results
pub use resolution::{Candidate, Resolution};
