//! Existence-ordered path search.
//!
//! For every root of the plan, the locale-qualified candidate
//! (`<root>/lang/<locale>/<name>`) is probed before the plain one
//! (`<root>/<name>`). The floor's plain candidate ends the search whether or
//! not it exists.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::locale::LocaleId;
use crate::paths::{Candidate, Resolution, SearchPlan, SearchRoot};
use crate::ports::FileProbe;

/// Resolves logical names against a search plan.
pub struct PathResolver {
    plan: SearchPlan,
    lang_dir: String,
    probe: Arc<dyn FileProbe>,
}

impl PathResolver {
    pub fn new(plan: SearchPlan, lang_dir: impl Into<String>, probe: Arc<dyn FileProbe>) -> Self {
        Self {
            plan,
            lang_dir: lang_dir.into(),
            probe,
        }
    }

    pub const fn plan(&self) -> &SearchPlan {
        &self.plan
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.probe.exists(path)
    }

    /// Every candidate for `filename`, in probe order.
    pub fn file_candidates(&self, filename: &str, locale: &LocaleId) -> Vec<Candidate> {
        self.plan
            .roots()
            .iter()
            .flat_map(|root| {
                [
                    self.localized(root, locale, filename),
                    plain(root, filename),
                ]
            })
            .collect()
    }

    /// Every candidate for `dirname`, in probe order. Never localized.
    pub fn directory_candidates(&self, dirname: &str) -> Vec<Candidate> {
        self.plan
            .roots()
            .iter()
            .map(|root| plain(root, dirname))
            .collect()
    }

    /// Resolve a file, preferring the locale-specific copy in each tier.
    pub fn resolve_file(&self, filename: &str, locale: &LocaleId) -> Resolution {
        let candidates = self.file_candidates(filename, locale);
        self.first_existing(filename, candidates)
    }

    /// Resolve a directory; locales play no part.
    pub fn resolve_directory(&self, dirname: &str) -> Resolution {
        let candidates = self.directory_candidates(dirname);
        self.first_existing(dirname, candidates)
    }

    fn localized(&self, root: &SearchRoot, locale: &LocaleId, name: &str) -> Candidate {
        Candidate {
            path: root
                .base
                .join(&self.lang_dir)
                .join(locale.as_str())
                .join(name),
            tier: root.tier,
            localized: true,
        }
    }

    // The last candidate is always the floor's plain path.
    fn first_existing(&self, name: &str, mut candidates: Vec<Candidate>) -> Resolution {
        let Some(floor) = candidates.pop() else {
            return Resolution::Fallback {
                path: self.plan.floor().base.join(name),
            };
        };

        for candidate in candidates {
            let found = self.probe.exists(&candidate.path);
            trace!(path = %candidate.path.display(), tier = %candidate.tier, found, "probe");
            if found {
                debug!("Resolved {:?} to {}", name, candidate.path.display());
                return Resolution::found(candidate);
            }
        }

        if self.probe.exists(&floor.path) {
            debug!("Resolved {:?} to {}", name, floor.path.display());
            Resolution::found(floor)
        } else {
            debug!(
                "No candidate exists for {:?}, falling back to {}",
                name,
                floor.path.display()
            );
            Resolution::Fallback { path: floor.path }
        }
    }
}

fn plain(root: &SearchRoot, name: &str) -> Candidate {
    Candidate {
        path: root.base.join(name),
        tier: root.tier,
        localized: false,
    }
}
