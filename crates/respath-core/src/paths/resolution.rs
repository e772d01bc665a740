//! Resolution results.

use std::fmt;
use std::path::{Path, PathBuf};

use super::plan::Tier;

/// One constructed path tried during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub tier: Tier,
    /// Whether the path includes the `lang/<locale>/` segment.
    pub localized: bool,
}

/// Outcome of a resolution call.
///
/// Resolution never fails. When no candidate exists the caller still gets a
/// usable path, tagged [`Resolution::Fallback`], and is expected to discover
/// the absence when it opens the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An existence check succeeded for this candidate.
    Resolved {
        path: PathBuf,
        tier: Tier,
        localized: bool,
    },
    /// Nothing existed; this is the floor's locale-agnostic candidate.
    Fallback { path: PathBuf },
}

impl Resolution {
    pub(crate) fn found(candidate: Candidate) -> Self {
        Self::Resolved {
            path: candidate.path,
            tier: candidate.tier,
            localized: candidate.localized,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Resolved { path, .. } | Self::Fallback { path } => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Self::Resolved { path, .. } | Self::Fallback { path } => path,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Tier the path was found in; `None` for a fallback.
    pub const fn tier(&self) -> Option<Tier> {
        match self {
            Self::Resolved { tier, .. } => Some(*tier),
            Self::Fallback { .. } => None,
        }
    }

    pub const fn is_localized(&self) -> bool {
        matches!(self, Self::Resolved { localized: true, .. })
    }
}

impl AsRef<Path> for Resolution {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}
