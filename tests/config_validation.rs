use gatherup::Settings;
use std::fs;
use tempfile::tempdir;

/// A nonexistent source base fails validation before anything is created.
#[test]
fn missing_source_fails() {
    let root = tempdir().expect("tempdir");
    let settings = Settings::new(
        root.path().join("absent"),
        root.path().join("target"),
        "zip",
        "x",
    );
    let err = settings.validate().expect_err("should fail");
    assert!(format!("{err:#}").contains("source_base"));
    // Nothing was mutated: the target was not created either.
    assert!(!root.path().join("target").exists());
}

/// A file in the source position fails validation.
#[test]
fn source_must_be_a_directory() {
    let root = tempdir().expect("tempdir");
    let file = root.path().join("not_a_dir");
    fs::write(&file, "x").expect("write");
    let settings = Settings::new(&file, root.path().join("target"), "zip", "x");
    assert!(settings.validate().is_err());
}

/// The target base is created when missing.
#[test]
fn target_is_created_if_missing() {
    let root = tempdir().expect("tempdir");
    let source = root.path().join("source");
    fs::create_dir(&source).expect("mkdir");
    let target = root.path().join("brand_new_target");
    let settings = Settings::new(&source, &target, "zip", "x");
    settings.validate().expect("validate");
    assert!(target.is_dir());
}

/// Equal or nested bases are rejected.
#[test]
fn bases_must_be_disjoint() {
    let root = tempdir().expect("tempdir");
    let source = root.path().join("source");
    fs::create_dir(&source).expect("mkdir");

    let same = Settings::new(&source, &source, "zip", "x");
    assert!(same.validate().is_err());

    let nested = Settings::new(&source, source.join("inner_target"), "zip", "x");
    assert!(nested.validate().is_err());
}
