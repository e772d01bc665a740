//! Installed-locale discovery.
//!
//! A locale pack is a directory under `lang/` that contains the marker file
//! (`system.json`). Discovery runs once; the result always starts with the
//! default locale.

use tracing::{info, trace};

use super::path_resolver::PathResolver;
use crate::locale::LocaleId;
use crate::paths::{DataLayout, LocaleCatalog};
use crate::ports::{EntryLister, FileProbe};

/// Build the ordered locale list for a plan.
///
/// Entries are appended in enumeration order after the default locale.
/// Nothing is deduplicated: a marked directory named like the default is
/// appended again after it.
pub fn discover_locales(
    resolver: &PathResolver,
    layout: &DataLayout,
    lister: &dyn EntryLister,
    probe: &dyn FileProbe,
) -> Vec<LocaleId> {
    let mut locales = vec![layout.default_locale_id()];

    match resolver.plan().catalog() {
        LocaleCatalog::Fixed(list) => {
            locales.extend(list.iter().map(|id| LocaleId::new(*id)));
        }
        LocaleCatalog::Scan => {
            let lang_dir = resolver.resolve_directory(&layout.lang_dir_name());
            for entry in lister.list(lang_dir.path(), "*") {
                trace!("Locale candidate: {}", entry.display());

                let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !probe.can_open(&entry.join(&layout.marker_file)) {
                    continue;
                }
                locales.push(LocaleId::new(name));
            }
        }
    }

    info!(count = locales.len(), "Discovered locales");
    locales
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use crate::paths::{BUNDLED_LOCALES, SearchPlan, SearchRoot, Tier};

    struct StaticLister(Vec<PathBuf>);

    impl EntryLister for StaticLister {
        fn list(&self, dir: &Path, pattern: &str) -> Vec<PathBuf> {
            assert_eq!(pattern, "*");
            self.0.iter().map(|name| dir.join(name)).collect()
        }
    }

    /// Probe where every path exists except markers not listed.
    struct MarkerProbe(Vec<PathBuf>);

    impl FileProbe for MarkerProbe {
        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn can_open(&self, path: &Path) -> bool {
            self.0.iter().any(|p| p == path)
        }
    }

    fn scan_resolver(probe: Arc<MarkerProbe>) -> PathResolver {
        let plan = SearchPlan::new(SearchRoot::new(Tier::Local, "data"), LocaleCatalog::Scan);
        PathResolver::new(plan, "lang", probe)
    }

    #[test]
    fn test_scan_keeps_only_marked_directories() {
        let probe = Arc::new(MarkerProbe(vec![PathBuf::from(
            "data/lang/french/system.json",
        )]));
        let lister = StaticLister(vec!["french".into(), "klingon".into()]);
        let resolver = scan_resolver(Arc::clone(&probe));

        let locales = discover_locales(&resolver, &DataLayout::default(), &lister, &*probe);
        let names: Vec<&str> = locales.iter().map(LocaleId::as_str).collect();
        assert_eq!(names, ["english", "french"]);
    }

    #[test]
    fn test_scan_appends_marked_default_after_seed() {
        let probe = Arc::new(MarkerProbe(vec![
            PathBuf::from("data/lang/english/system.json"),
            PathBuf::from("data/lang/german/system.json"),
        ]));
        let lister = StaticLister(vec!["english".into(), "german".into()]);
        let resolver = scan_resolver(Arc::clone(&probe));

        let locales = discover_locales(&resolver, &DataLayout::default(), &lister, &*probe);
        let names: Vec<&str> = locales.iter().map(LocaleId::as_str).collect();
        assert_eq!(names[0], "english");
        assert_eq!(names, ["english", "english", "german"]);
    }

    #[test]
    fn test_fixed_catalog_ignores_lister() {
        let plan = SearchPlan::new(
            SearchRoot::new(Tier::Bundled, "romfs:/"),
            LocaleCatalog::Fixed(BUNDLED_LOCALES),
        );
        let probe = Arc::new(MarkerProbe(Vec::new()));
        let resolver = PathResolver::new(plan, "lang", Arc::clone(&probe) as Arc<dyn FileProbe>);
        let lister = StaticLister(vec!["should-not-appear".into()]);

        let locales = discover_locales(&resolver, &DataLayout::default(), &lister, &*probe);
        assert_eq!(locales.len(), BUNDLED_LOCALES.len() + 1);
        assert_eq!(locales[0], "english");
        assert_eq!(locales[1], "chinese");
        assert!(locales.iter().all(|l| l != "should-not-appear"));
    }
}
