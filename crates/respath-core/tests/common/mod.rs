//! Shared fixtures for resource resolution tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use respath_core::{
    DataLayout, FixedLocale, LocaleCatalog, ResourceDeps, ResourceManager, SearchPlan, SearchRoot,
    Tier,
};
use tempfile::TempDir;

/// A temporary directory holding one or more data roots.
pub struct DataTree {
    dir: TempDir,
}

impl DataTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create a file (and its parents) at `rel`.
    pub fn file(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, rel).expect("write fixture file");
        path
    }

    /// Create a directory (and its parents) at `rel`.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("create fixture dir");
        path
    }

    /// Plan with a user root, a system root and a local floor, all inside
    /// the tree.
    pub fn tiered_plan(&self) -> SearchPlan {
        SearchPlan::new(SearchRoot::new(Tier::Local, self.path("local")), LocaleCatalog::Scan)
            .with_root(SearchRoot::new(Tier::User, self.path("user")))
            .with_root(SearchRoot::new(Tier::System, self.path("system")))
    }

    /// Manager over [`Self::tiered_plan`] with the real filesystem ports.
    pub fn tiered_manager(&self, locale: &str) -> ResourceManager {
        let layout = DataLayout::local(self.path("local"));
        let deps = ResourceDeps::filesystem(Arc::new(FixedLocale::new(locale)));
        ResourceManager::new(&layout, self.tiered_plan(), deps)
    }

    /// Manager whose only root is `<tree>/data`.
    pub fn local_manager(&self, locale: &str) -> ResourceManager {
        let layout = DataLayout::local(self.path("data"));
        let plan = SearchPlan::new(SearchRoot::new(Tier::Local, self.path("data")), LocaleCatalog::Scan);
        let deps = ResourceDeps::filesystem(Arc::new(FixedLocale::new(locale)));
        ResourceManager::new(&layout, plan, deps)
    }
}

pub fn assert_same_path(actual: &Path, expected: &Path) {
    assert_eq!(
        actual,
        expected,
        "expected {}, got {}",
        expected.display(),
        actual.display()
    );
}
