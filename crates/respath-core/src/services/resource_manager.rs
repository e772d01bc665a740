//! Resource manager: the public face of path resolution.
//!
//! Owns a [`PathResolver`] for the selected platform, reads the current
//! locale on every lookup, and holds the locale list discovered at
//! construction.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use super::locale_discovery::discover_locales;
use super::path_resolver::PathResolver;
use crate::locale::LocaleId;
use crate::paths::{Candidate, DataLayout, Platform, Resolution, SearchPlan};
use crate::ports::{EntryLister, FileProbe, FsProbe, GlobLister, LocaleSource};

/// Capabilities injected into a [`ResourceManager`].
#[derive(Clone)]
pub struct ResourceDeps {
    pub locale: Arc<dyn LocaleSource>,
    pub lister: Arc<dyn EntryLister>,
    pub probe: Arc<dyn FileProbe>,
}

impl ResourceDeps {
    /// Real filesystem probing and glob enumeration.
    pub fn filesystem(locale: Arc<dyn LocaleSource>) -> Self {
        Self {
            locale,
            lister: Arc::new(GlobLister),
            probe: Arc::new(FsProbe),
        }
    }
}

/// Resolves logical resource names to real paths.
///
/// Construct one at the application's composition root and pass it to
/// whatever loads assets. Lookups are synchronous and hit the filesystem on
/// every call; nothing is cached besides the locale list.
pub struct ResourceManager {
    resolver: PathResolver,
    locale: Arc<dyn LocaleSource>,
    default_locale: LocaleId,
    locales: Vec<LocaleId>,
}

impl ResourceManager {
    /// Build a manager from an explicit plan and discover installed locales.
    pub fn new(layout: &DataLayout, plan: SearchPlan, deps: ResourceDeps) -> Self {
        let resolver = PathResolver::new(plan, layout.lang_dir.clone(), Arc::clone(&deps.probe));
        let locales = discover_locales(&resolver, layout, deps.lister.as_ref(), deps.probe.as_ref());

        Self {
            resolver,
            locale: deps.locale,
            default_locale: layout.default_locale_id(),
            locales,
        }
    }

    /// Build a manager for `platform` using the real filesystem.
    pub fn with_platform(
        platform: Platform,
        layout: &DataLayout,
        locale: Arc<dyn LocaleSource>,
    ) -> Self {
        Self::new(layout, platform.plan(layout), ResourceDeps::filesystem(locale))
    }

    /// Resolve a file, preferring the current locale's copy in each tier.
    ///
    /// Always yields a path; see [`Resolution::Fallback`].
    pub fn resolve(&self, filename: &str) -> Resolution {
        let locale = self.lookup_locale();
        self.resolver.resolve_file(filename, &locale)
    }

    /// Resolve a directory. Directories are never locale-specific.
    pub fn resolve_path_for_directory(&self, dirname: &str) -> Resolution {
        self.resolver.resolve_directory(dirname)
    }

    /// Locales found at construction, default first.
    pub fn discovered_locales(&self) -> &[LocaleId] {
        &self.locales
    }

    pub fn is_available(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// Whether anything exists at `path`, using the manager's probe.
    pub fn file_exists(&self, path: &Path) -> bool {
        self.resolver.exists(path)
    }

    /// All candidates [`Self::resolve`] would probe, in order.
    pub fn candidates(&self, filename: &str) -> Vec<Candidate> {
        let locale = self.lookup_locale();
        self.resolver.file_candidates(filename, &locale)
    }

    /// All candidates [`Self::resolve_path_for_directory`] would probe, in order.
    pub fn directory_candidates(&self, dirname: &str) -> Vec<Candidate> {
        self.resolver.directory_candidates(dirname)
    }

    pub const fn plan(&self) -> &SearchPlan {
        self.resolver.plan()
    }

    pub fn current_locale(&self) -> LocaleId {
        self.locale.current_locale()
    }

    /// Current locale as a path segment. Anything that would escape the
    /// `lang/` directory is replaced by the default locale.
    fn lookup_locale(&self) -> LocaleId {
        let locale = self.locale.current_locale();
        if LocaleId::is_valid(locale.as_str()) {
            locale
        } else {
            warn!(locale = %locale, "Ignoring unusable locale, using {}", self.default_locale);
            self.default_locale.clone()
        }
    }
}
