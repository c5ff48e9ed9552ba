use gatherup::config::LogLevel;
use gatherup::config::xml::load_partial_from_path;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.xml");
    fs::write(&path, contents).expect("write config");
    (dir, path)
}

/// Full config parses with surrounding whitespace trimmed from every value.
#[test]
fn full_config_parses_and_trims() {
    let (_dir, path) = write_config(
        "<config>\n  <source_base>  /data/in  </source_base>\n  <target_base>/data/out</target_base>\n  <extension> ZIP </extension>\n  <pattern> final </pattern>\n  <log_level>debug</log_level>\n  <log_file>/var/log/gatherup.log</log_file>\n</config>\n",
    );
    let partial = load_partial_from_path(&path).expect("parse");
    assert_eq!(partial.source_base, Some(PathBuf::from("/data/in")));
    assert_eq!(partial.target_base, Some(PathBuf::from("/data/out")));
    assert_eq!(partial.extension.as_deref(), Some("ZIP"));
    assert_eq!(partial.pattern.as_deref(), Some("final"));
    assert_eq!(partial.log_level, Some(LogLevel::Debug));
    assert_eq!(partial.log_file, Some(PathBuf::from("/var/log/gatherup.log")));
}

/// Empty and whitespace-only elements are treated as unset.
#[test]
fn empty_elements_are_unset() {
    let (_dir, path) = write_config(
        "<config>\n  <source_base></source_base>\n  <log_file>   </log_file>\n  <pattern>x</pattern>\n</config>\n",
    );
    let partial = load_partial_from_path(&path).expect("parse");
    assert_eq!(partial.source_base, None);
    assert_eq!(partial.log_file, None);
    assert_eq!(partial.pattern.as_deref(), Some("x"));
}

/// An unknown log level string is ignored rather than failing the load.
#[test]
fn unknown_log_level_is_ignored() {
    let (_dir, path) = write_config("<config><log_level>loudest</log_level></config>");
    let partial = load_partial_from_path(&path).expect("parse");
    assert_eq!(partial.log_level, None);
}

/// Malformed XML is a load error with the file path in the context.
#[test]
fn malformed_xml_is_an_error() {
    let (_dir, path) = write_config("<config><source_base>/in</config>");
    let err = load_partial_from_path(&path).expect_err("should fail");
    assert!(format!("{err:#}").contains("config.xml"));
}

/// A missing file is a load error, not a silent default.
#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nope.xml");
    assert!(load_partial_from_path(&path).is_err());
}
