//! Search plans: the ordered roots a platform probes.
//!
//! A plan always ends with its *floor*, the root whose locale-agnostic
//! candidate is returned when nothing else exists.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Priority level of a search root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Per-user writable data directory.
    User,
    /// System-wide installation directory.
    System,
    /// Read-only asset package shipped with the executable.
    Bundled,
    /// Relative directory under the working directory.
    Local,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
            Self::Bundled => "bundled",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A concrete root directory within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRoot {
    pub tier: Tier,
    pub base: PathBuf,
}

impl SearchRoot {
    pub fn new(tier: Tier, base: impl Into<PathBuf>) -> Self {
        Self {
            tier,
            base: base.into(),
        }
    }
}

/// How the set of installed locales is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleCatalog {
    /// Enumerate the locale directory and validate each entry.
    Scan,
    /// Platform cannot list directories; use a built-in list.
    Fixed(&'static [&'static str]),
}

/// Ordered list of search roots plus the locale catalog strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    /// Never empty; the last element is the floor.
    roots: Vec<SearchRoot>,
    catalog: LocaleCatalog,
}

impl SearchPlan {
    /// Start a plan that consists of just its floor.
    pub fn new(floor: SearchRoot, catalog: LocaleCatalog) -> Self {
        Self {
            roots: vec![floor],
            catalog,
        }
    }

    /// Add a root with lower priority than the ones already added but
    /// higher priority than the floor.
    #[must_use]
    pub fn with_root(mut self, root: SearchRoot) -> Self {
        let floor_index = self.roots.len() - 1;
        self.roots.insert(floor_index, root);
        self
    }

    /// All roots in probe order, floor last.
    pub fn roots(&self) -> &[SearchRoot] {
        &self.roots
    }

    /// Roots that must pass an existence check, in probe order.
    pub fn checked_roots(&self) -> &[SearchRoot] {
        &self.roots[..self.roots.len() - 1]
    }

    pub fn floor(&self) -> &SearchRoot {
        &self.roots[self.roots.len() - 1]
    }

    pub const fn catalog(&self) -> LocaleCatalog {
        self.catalog
    }
}

impl fmt::Display for SearchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in &self.roots {
            writeln!(f, "{} = {}", root.tier, root.base.display())?;
        }
        match self.catalog {
            LocaleCatalog::Scan => write!(f, "locales = scan"),
            LocaleCatalog::Fixed(list) => write!(f, "locales = fixed ({})", list.join(", ")),
        }
    }
}
