//! On-disk data layout.
//!
//! Names every directory and file the resolver composes into candidate
//! paths. The defaults describe the stock game data layout; a JSON layout
//! file can override any field.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::PathError;
use crate::locale::{DEFAULT_LOCALE, LocaleId};

/// Directory and file names used to build search roots and candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLayout {
    /// Application directory name under shared data prefixes; also the
    /// organization directory under the per-user preference directory.
    pub app_name: String,
    /// Application directory name below `app_name` in the per-user
    /// preference directory.
    pub pref_app: String,
    /// Data directory name under each application root.
    pub data_dir: String,
    /// Locale container directory under each data root.
    pub lang_dir: String,
    /// File that must exist inside a locale directory for it to count.
    pub marker_file: String,
    /// Locale that is always available.
    pub default_locale: String,
    /// Relative root probed last, against the working directory.
    pub local_root: PathBuf,
    /// Root of the read-only asset package on bundled platforms.
    pub bundled_root: PathBuf,
    /// System-wide install prefixes, highest priority first.
    pub system_prefixes: Vec<PathBuf>,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            app_name: "nxengine".to_string(),
            pref_app: "nxengine-evo".to_string(),
            data_dir: "data".to_string(),
            lang_dir: "lang".to_string(),
            marker_file: "system.json".to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            local_root: PathBuf::from("data"),
            bundled_root: PathBuf::from("romfs:/"),
            system_prefixes: vec![
                PathBuf::from("/usr/share"),
                PathBuf::from("/usr/local/share"),
            ],
        }
    }
}

impl DataLayout {
    /// Layout rooted at `local_root` with no system prefixes.
    ///
    /// Useful for tests and portable installs where only the working
    /// directory tier matters.
    pub fn local(local_root: impl Into<PathBuf>) -> Self {
        Self {
            local_root: local_root.into(),
            system_prefixes: Vec::new(),
            ..Self::default()
        }
    }

    /// Load a layout from a JSON file and validate it.
    pub fn load(path: &Path) -> Result<Self, PathError> {
        let raw = fs::read_to_string(path).map_err(|e| PathError::LayoutFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let layout: Self = serde_json::from_str(&raw).map_err(|e| PathError::LayoutFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        validate_layout(&layout)?;
        Ok(layout)
    }

    pub fn default_locale_id(&self) -> LocaleId {
        LocaleId::new(self.default_locale.clone())
    }

    /// Logical directory name of the locale container, e.g. `lang/`.
    pub fn lang_dir_name(&self) -> String {
        format!("{}/", self.lang_dir)
    }
}

/// Reject layouts whose path segments are empty.
pub fn validate_layout(layout: &DataLayout) -> Result<(), PathError> {
    let required = [
        ("app_name", layout.app_name.as_str()),
        ("pref_app", layout.pref_app.as_str()),
        ("data_dir", layout.data_dir.as_str()),
        ("lang_dir", layout.lang_dir.as_str()),
        ("marker_file", layout.marker_file.as_str()),
        ("default_locale", layout.default_locale.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(PathError::EmptyLayoutField(field));
        }
    }

    if layout.local_root.as_os_str().is_empty() {
        return Err(PathError::EmptyLayoutField("local_root"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_layout_is_valid() {
        assert!(validate_layout(&DataLayout::default()).is_ok());
        assert_eq!(DataLayout::default().lang_dir_name(), "lang/");
    }

    #[test]
    fn test_load_partial_layout_keeps_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("layout.json");
        fs::write(&path, r#"{ "app_name": "cavestory", "system_prefixes": [] }"#).unwrap();

        let layout = DataLayout::load(&path).unwrap();
        assert_eq!(layout.app_name, "cavestory");
        assert!(layout.system_prefixes.is_empty());
        assert_eq!(layout.marker_file, "system.json");
    }

    #[test]
    fn test_load_rejects_empty_marker() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("layout.json");
        fs::write(&path, r#"{ "marker_file": "" }"#).unwrap();

        assert!(matches!(
            DataLayout::load(&path),
            Err(PathError::EmptyLayoutField("marker_file"))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let result = DataLayout::load(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(PathError::LayoutFile { .. })));
    }
}
