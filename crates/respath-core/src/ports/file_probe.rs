//! Filesystem probing port.

use std::fs::{self, File};
use std::path::Path;

/// Existence and readability checks.
pub trait FileProbe: Send + Sync {
    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` can be opened for reading.
    ///
    /// Used to validate marker files; the handle is not kept.
    fn can_open(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
///
/// `exists` is a plain metadata lookup, so files and directories are
/// treated alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn can_open(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exists_for_files_and_directories() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("greeting.txt");
        fs::write(&file, "hi").unwrap();

        assert!(FsProbe.exists(temp.path()));
        assert!(FsProbe.exists(&file));
        assert!(!FsProbe.exists(&temp.path().join("missing.txt")));
    }

    #[test]
    fn test_can_open_requires_file() {
        let temp = tempdir().unwrap();
        let marker = temp.path().join("system.json");
        assert!(!FsProbe.can_open(&marker));

        fs::write(&marker, "{}").unwrap();
        assert!(FsProbe.can_open(&marker));
    }
}
