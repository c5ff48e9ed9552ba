use gatherup::{reap, sweep};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// A touched directory that still holds a file is left untouched.
#[test]
fn reap_keeps_non_empty_directories() {
    let source = tempdir().expect("tempdir");
    let sub = source.path().join("keep");
    fs::create_dir(&sub).expect("mkdir");
    fs::write(sub.join("leftover.txt"), "x").expect("write");

    let touched: HashSet<PathBuf> = [sub.clone()].into();
    reap(&touched, source.path(), false);

    assert!(sub.exists());
    assert!(sub.join("leftover.txt").exists());
}

/// The source root is never deleted, even when it is in the touched set and empty.
#[test]
fn reap_never_deletes_the_source_root() {
    let source = tempdir().expect("tempdir");
    let touched: HashSet<PathBuf> = [source.path().to_path_buf()].into();
    reap(&touched, source.path(), false);
    assert!(source.path().exists());
}

/// Empty touched directories are removed; a failure on one (already gone)
/// does not stop the others.
#[test]
fn reap_removes_empty_directories_and_continues_past_missing_ones() {
    let source = tempdir().expect("tempdir");
    let gone = source.path().join("was_never_created");
    let empty = source.path().join("empty");
    fs::create_dir(&empty).expect("mkdir");

    let touched: HashSet<PathBuf> = [gone, empty.clone()].into();
    reap(&touched, source.path(), false);

    assert!(!empty.exists());
    assert!(source.path().exists());
}

/// Sweep removes empty immediate children the walk never touched, and keeps
/// everything else: non-empty children, root-level files, and deeper empties.
#[test]
fn sweep_is_shallow_and_only_removes_empties() {
    let source = tempdir().expect("tempdir");
    let empty = source.path().join("already_empty");
    let full = source.path().join("full");
    let nested_parent = source.path().join("parent");
    let nested_empty = nested_parent.join("empty_inside");
    fs::create_dir(&empty).expect("mkdir");
    fs::create_dir(&full).expect("mkdir");
    fs::create_dir_all(&nested_empty).expect("mkdirs");
    fs::write(full.join("file.txt"), "x").expect("write");
    fs::write(source.path().join("root_file.txt"), "x").expect("write");

    sweep(source.path(), false);

    assert!(!empty.exists(), "pre-existing empty child should be swept");
    assert!(full.exists());
    assert!(full.join("file.txt").exists());
    assert!(source.path().join("root_file.txt").exists());
    // One level only: parent is non-empty, so the nested empty stays.
    assert!(nested_empty.exists());
}

/// Dry-run reaping and sweeping delete nothing.
#[test]
fn dry_run_leaves_directories_alone() {
    let source = tempdir().expect("tempdir");
    let empty = source.path().join("empty");
    fs::create_dir(&empty).expect("mkdir");

    let touched: HashSet<PathBuf> = [empty.clone()].into();
    reap(&touched, source.path(), true);
    assert!(empty.exists());

    sweep(source.path(), true);
    assert!(empty.exists());
}
