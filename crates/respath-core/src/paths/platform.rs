//! Platform search strategies.
//!
//! Each platform family contributes an ordered list of roots. The variant is
//! chosen once (normally from the build target) and turned into a
//! [`SearchPlan`]; the resolver itself has no platform conditionals.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use super::error::PathError;
use super::layout::DataLayout;
use super::plan::{LocaleCatalog, SearchPlan, SearchRoot, Tier};

#[cfg(not(any(unix, windows, target_os = "horizon")))]
compile_error!("respath has no resource search strategy for this target");

/// Locales shipped in the asset package on platforms without directory listing.
pub const BUNDLED_LOCALES: &[&str] = &[
    "chinese", "french", "german", "italian", "japanese", "polish", "russian",
];

/// Platform family, selecting the search roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// XDG-style home data directory, then system prefixes.
    Linux,
    /// Per-user application support directory.
    MacOs,
    /// Read-only asset package only (console builds).
    Bundled,
    /// Working-directory data only.
    Generic,
}

impl Platform {
    /// The platform this binary was built for.
    pub const fn current() -> Self {
        if cfg!(target_os = "horizon") {
            Self::Bundled
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Generic
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Bundled => "bundled",
            Self::Generic => "generic",
        }
    }

    /// Build the search plan using the real home and preference directories.
    pub fn plan(self, layout: &DataLayout) -> SearchPlan {
        self.plan_with(layout, &HostDirs::detect())
    }

    /// Build the search plan against explicit host directories.
    ///
    /// Roots that cannot be determined are skipped, not reported.
    pub fn plan_with(self, layout: &DataLayout, host: &HostDirs) -> SearchPlan {
        if self == Self::Bundled {
            return SearchPlan::new(
                SearchRoot::new(Tier::Bundled, &layout.bundled_root),
                LocaleCatalog::Fixed(BUNDLED_LOCALES),
            );
        }

        let mut plan = SearchPlan::new(
            SearchRoot::new(Tier::Local, &layout.local_root),
            LocaleCatalog::Scan,
        );

        match self {
            Self::Linux => {
                match linux_user_root(layout, host) {
                    Ok(root) => plan = plan.with_root(SearchRoot::new(Tier::User, root)),
                    Err(e) => debug!("Skipping user data tier: {e}"),
                }
                for root in system_roots(layout) {
                    plan = plan.with_root(SearchRoot::new(Tier::System, root));
                }
            }
            Self::MacOs => match pref_root(layout, host) {
                Ok(root) => plan = plan.with_root(SearchRoot::new(Tier::User, root)),
                Err(e) => debug!("Skipping user data tier: {e}"),
            },
            Self::Bundled | Self::Generic => {}
        }

        plan
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "macos" | "osx" => Ok(Self::MacOs),
            "bundled" | "switch" => Ok(Self::Bundled),
            "generic" | "windows" => Ok(Self::Generic),
            _ => Err(PathError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Host directories that per-user roots are derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostDirs {
    /// The user's home directory.
    pub home: Option<PathBuf>,
    /// The per-user application support directory
    /// (`~/Library/Application Support` on macOS). The user root below it
    /// is `<org>/<app>/data`.
    pub app_support: Option<PathBuf>,
}

impl HostDirs {
    pub fn detect() -> Self {
        Self {
            home: dirs::home_dir(),
            app_support: dirs::data_dir(),
        }
    }
}

fn linux_user_root(layout: &DataLayout, host: &HostDirs) -> Result<PathBuf, PathError> {
    let home = host.home.as_ref().ok_or(PathError::NoHomeDir)?;
    Ok(home
        .join(".local/share")
        .join(&layout.app_name)
        .join(&layout.data_dir))
}

fn pref_root(layout: &DataLayout, host: &HostDirs) -> Result<PathBuf, PathError> {
    let support = host.app_support.as_ref().ok_or(PathError::NoPrefDir)?;
    Ok(support
        .join(&layout.app_name)
        .join(&layout.pref_app)
        .join(&layout.data_dir))
}

fn system_roots(layout: &DataLayout) -> impl Iterator<Item = PathBuf> + '_ {
    layout
        .system_prefixes
        .iter()
        .map(|prefix| prefix.join(&layout.app_name).join(&layout.data_dir))
}
