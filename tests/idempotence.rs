use gatherup::{Settings, migrate, reap, sweep};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run_once(settings: &Settings) -> gatherup::RunReport {
    let report = migrate(settings).expect("migrate");
    reap(&report.touched, &settings.source_base, settings.dry_run);
    sweep(&settings.source_base, settings.dry_run);
    report
}

fn dir_names(path: &Path) -> BTreeSet<String> {
    fs::read_dir(path)
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect()
}

/// Running the migration twice with no filesystem changes in between yields
/// identical target contents, and the second pass moves nothing.
#[test]
fn second_run_is_a_no_op() {
    let source = tempdir().expect("tempdir");
    let target = tempdir().expect("tempdir");
    for (sub, file) in [("b", "report_final.zip"), ("c", "report_final.zip"), ("d", "other_final.zip")] {
        let dir = source.path().join(sub);
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(dir.join(file), sub).expect("write");
    }
    // A root-level match stays behind and must not be picked up by run two.
    fs::write(source.path().join("root_final.zip"), "root").expect("write");

    let settings = Settings::new(source.path(), target.path(), "zip", "final");

    let first = run_once(&settings);
    assert_eq!(first.moved.len(), 2);
    let after_first = dir_names(target.path());

    let second = run_once(&settings);
    assert!(second.moved.is_empty(), "second run must move nothing");
    assert_eq!(second.duplicates_removed, 0);
    assert_eq!(dir_names(target.path()), after_first);
    assert!(source.path().join("root_final.zip").exists());
}
