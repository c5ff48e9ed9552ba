//! The migration walk.
//! Streams candidate files out of the source tree, moves matches into the
//! target, drops same-named duplicates, and records the directories files
//! were taken from so they can be reaped afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::matcher::{NamePattern, extension_matches};
use crate::config::Settings;
use crate::shutdown;

/// Outcome of one migration run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Base names moved into the target, in discovery order.
    /// A name appears at most once per run.
    pub moved: Vec<String>,
    /// Source copies removed because the name was already present,
    /// either earlier in this run or in the target snapshot.
    pub duplicates_removed: usize,
    /// Per-file move/delete failures that were logged and skipped.
    pub failures: usize,
    /// Directories a file was moved or removed from. Consumed by `reap`.
    pub touched: HashSet<PathBuf>,
}

/// Walk the source tree and migrate every matching file.
///
/// Fails only on setup errors (target snapshot unreadable, pattern invalid);
/// a failure on one file is logged and never aborts the walk. The walk is
/// sorted by file name, so duplicate handling across sibling directories is
/// deterministic: the lexicographically first path wins.
pub fn migrate(settings: &Settings) -> Result<RunReport> {
    let pattern = NamePattern::new(&settings.pattern)?;
    let target_index = target_index(&settings.target_base)?;
    let mut report = RunReport::default();

    for entry in WalkDir::new(&settings.source_base)
        .min_depth(1)
        .sort_by_file_name()
    {
        if shutdown::is_requested() {
            warn!("Shutdown requested; stopping the walk early");
            break;
        }
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry during walk");
                report.failures += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !extension_matches(path, &settings.extension) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !pattern.matches(&name) {
            continue;
        }
        let Some(parent) = path.parent() else {
            continue;
        };
        // Files sitting directly in the source root are never moved; only
        // subdirectory finds are migration candidates.
        if parent == settings.source_base.as_path() {
            debug!(file = %path.display(), "Skipping root-level match");
            continue;
        }

        let parent = parent.to_path_buf();
        let result = if report.moved.iter().any(|m| m == &name) {
            debug!(file = %path.display(), "Name already moved in this run, removing duplicate");
            remove_duplicate(path, settings.dry_run).map(|_| None)
        } else if target_index.contains(&name) {
            info!(file = %path.display(), "File already exists in target directory, removing source copy");
            remove_duplicate(path, settings.dry_run).map(|_| None)
        } else {
            move_into_target(path, &name, settings).map(|_| Some(name.clone()))
        };

        match result {
            Ok(Some(moved_name)) => {
                report.moved.push(moved_name);
                report.touched.insert(parent);
            }
            Ok(None) => {
                report.duplicates_removed += 1;
                report.touched.insert(parent);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %format!("{e:#}"), "Leaving file in place after I/O failure");
                report.failures += 1;
            }
        }
    }

    Ok(report)
}

/// Snapshot of base names of regular files directly inside the target.
/// Taken once at run start and not refreshed; files landing in the target
/// during the run are not reconsidered (single-writer assumption).
fn target_index(target_base: &Path) -> Result<HashSet<String>> {
    let mut names = HashSet::new();
    let entries = fs::read_dir(target_base)
        .with_context(|| format!("read target directory '{}'", target_base.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("list target directory '{}'", target_base.display()))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file {
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Move with clobber semantics: rename when possible, copy+remove when the
/// rename fails (other device, or an existing destination on Windows).
fn move_into_target(src: &Path, name: &str, settings: &Settings) -> Result<()> {
    let dest = settings.target_base.join(name);
    if settings.dry_run {
        info!(src = %src.display(), dest = %dest.display(), "Dry-run: would move file");
        return Ok(());
    }
    match fs::rename(src, &dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "Renamed file into target");
        }
        Err(e) => {
            debug!(error = %e, "Rename failed, falling back to copy+remove");
            fs::copy(src, &dest)
                .with_context(|| format!("copy {} -> {}", src.display(), dest.display()))?;
            fs::remove_file(src)
                .with_context(|| format!("remove original '{}'", src.display()))?;
        }
    }
    Ok(())
}

fn remove_duplicate(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        info!(file = %path.display(), "Dry-run: would remove duplicate");
        return Ok(());
    }
    fs::remove_file(path).with_context(|| format!("remove duplicate '{}'", path.display()))
}
