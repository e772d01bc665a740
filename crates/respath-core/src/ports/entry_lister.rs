//! Directory enumeration port.

use std::path::{Path, PathBuf};

use globwalk::GlobWalkerBuilder;
use tracing::debug;

/// Enumerate entries directly under a directory that match a pattern.
pub trait EntryLister: Send + Sync {
    /// Matching entries as `dir`-prefixed paths.
    ///
    /// A missing or unreadable directory yields an empty list.
    fn list(&self, dir: &Path, pattern: &str) -> Vec<PathBuf>;
}

/// Glob-based lister using `globwalk`, one level deep, sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobLister;

impl EntryLister for GlobLister {
    fn list(&self, dir: &Path, pattern: &str) -> Vec<PathBuf> {
        let walker = match GlobWalkerBuilder::new(dir, pattern)
            .min_depth(1)
            .max_depth(1)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
            .build()
        {
            Ok(walker) => walker,
            Err(e) => {
                debug!("Invalid pattern {:?} under {}: {}", pattern, dir.display(), e);
                return Vec::new();
            }
        };

        walker
            .filter_map(Result::ok)
            .map(globwalk::DirEntry::into_path)
            .collect()
    }
}
