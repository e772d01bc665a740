//! Integration tests for file and directory resolution against a real
//! filesystem tree.

mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::{DataTree, assert_same_path};
use respath_core::{DataLayout, FixedLocale, Platform, Resolution, ResourceManager, Tier};

#[test]
fn only_local_root_has_file() {
    let tree = DataTree::new();
    let expected = tree.file("data/greeting.txt");

    let manager = tree.local_manager("english");
    let resolution = manager.resolve("greeting.txt");

    assert_same_path(resolution.path(), &expected);
    assert_eq!(resolution.tier(), Some(Tier::Local));
}

#[test]
fn localized_copy_wins_over_plain_copy() {
    let tree = DataTree::new();
    tree.file("data/greeting.txt");
    let localized = tree.file("data/lang/french/greeting.txt");

    let manager = tree.local_manager("french");
    let resolution = manager.resolve("greeting.txt");

    assert_same_path(resolution.path(), &localized);
    assert!(resolution.is_localized());
}

#[test]
fn missing_locale_pack_falls_back_to_plain_copy() {
    let tree = DataTree::new();
    let plain = tree.file("data/greeting.txt");

    let manager = tree.local_manager("japanese");
    assert_same_path(manager.resolve("greeting.txt").path(), &plain);
}

#[test]
fn nothing_exists_returns_unchecked_floor_path() {
    let tree = DataTree::new();
    let manager = tree.local_manager("english");

    let resolution = manager.resolve("x.txt");

    assert_eq!(
        resolution,
        Resolution::Fallback {
            path: tree.path("data").join("x.txt")
        }
    );
    assert!(!resolution.path().exists());
}

#[test]
fn nothing_exists_with_stock_layout_returns_relative_data_path() {
    let layout = DataLayout::default();
    let manager = ResourceManager::with_platform(
        Platform::Generic,
        &layout,
        Arc::new(FixedLocale::new("english")),
    );

    // Generic platforms only search the working-directory root.
    let resolution = manager.resolve("x.txt");
    assert_eq!(resolution.path(), Path::new("data/x.txt"));
}

#[test]
fn higher_tier_is_preferred() {
    let tree = DataTree::new();
    let user = tree.file("user/stage/0.pxm");
    tree.file("system/stage/0.pxm");
    tree.file("local/stage/0.pxm");

    let manager = tree.tiered_manager("english");
    let resolution = manager.resolve("stage/0.pxm");

    assert_same_path(resolution.path(), &user);
    assert_eq!(resolution.tier(), Some(Tier::User));
}

#[test]
fn plain_copy_in_higher_tier_beats_localized_copy_in_lower_tier() {
    let tree = DataTree::new();
    let system = tree.file("system/font.fnt");
    tree.file("local/lang/german/font.fnt");

    let manager = tree.tiered_manager("german");
    let resolution = manager.resolve("font.fnt");

    assert_same_path(resolution.path(), &system);
    assert!(!resolution.is_localized());
}

#[test]
fn localized_copy_found_in_middle_tier() {
    let tree = DataTree::new();
    let localized = tree.file("system/lang/german/font.fnt");
    tree.file("system/font.fnt");
    tree.file("local/font.fnt");

    let manager = tree.tiered_manager("german");
    assert_same_path(manager.resolve("font.fnt").path(), &localized);
}

#[test]
fn directory_resolution_ignores_locale() {
    let tree = DataTree::new();
    tree.dir("user/lang/french/maps");
    let system = tree.dir("system/maps");

    let manager = tree.tiered_manager("french");
    let resolution = manager.resolve_path_for_directory("maps");

    assert_same_path(resolution.path(), &system);
    for candidate in manager.directory_candidates("maps") {
        assert!(!candidate.localized);
        assert!(!candidate.path.to_string_lossy().contains("french"));
    }
}

#[test]
fn directory_fallback_is_local_root() {
    let tree = DataTree::new();
    let manager = tree.tiered_manager("english");

    let resolution = manager.resolve_path_for_directory("lang/");

    assert!(resolution.is_fallback());
    assert_eq!(resolution.path(), tree.path("local").join("lang/"));
}

#[test]
fn files_and_directories_share_existence_check() {
    let tree = DataTree::new();
    let dir = tree.dir("user/music");

    let manager = tree.tiered_manager("english");
    // A directory satisfies a file lookup too.
    assert_same_path(manager.resolve("music").path(), &dir);
    assert!(manager.file_exists(&dir));
}

#[test]
fn resolve_never_returns_empty_path() {
    let tree = DataTree::new();
    let manager = tree.tiered_manager("english");

    for name in ["", "a", "deep/nested/name.bin"] {
        let path: PathBuf = manager.resolve(name).into_path();
        assert!(!path.as_os_str().is_empty(), "empty path for {name:?}");
    }
}
