//! Filesystem operations: separator normalization, the migration walk, and
//! directory teardown once the walk is done.

pub mod matcher;
pub mod migrate;
pub mod reap;

pub use matcher::NamePattern;
pub use migrate::{RunReport, migrate};
pub use reap::{reap, sweep};

use std::fs;
use std::io;
use std::path::Path;

/// Rewrite a path string to the host's separator convention.
/// Pure string substitution; existence and legality are not checked.
pub fn native_separators(path: &str) -> String {
    if cfg!(windows) {
        path.replace('/', "\\")
    } else {
        path.replace('\\', "/")
    }
}

/// True when `path` has no entries at all.
pub(crate) fn dir_is_empty(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn native_separators_rewrites_backslashes_on_unix() {
        assert_eq!(native_separators(r"a\b\c.txt"), "a/b/c.txt");
        assert_eq!(native_separators("a/b/c.txt"), "a/b/c.txt");
    }

    #[cfg(windows)]
    #[test]
    fn native_separators_rewrites_slashes_on_windows() {
        assert_eq!(native_separators("a/b/c.txt"), r"a\b\c.txt");
    }

    #[test]
    fn native_separators_leaves_malformed_input_alone() {
        assert_eq!(native_separators(""), "");
        assert_eq!(native_separators("no-separators"), "no-separators");
    }

    #[test]
    fn dir_is_empty_distinguishes_contents() {
        let dir = tempfile::tempdir().unwrap();
        assert!(dir_is_empty(dir.path()).unwrap());
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        assert!(!dir_is_empty(dir.path()).unwrap());
    }
}
