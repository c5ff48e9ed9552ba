//! Directory teardown after the walk.
//! `reap` deletes the touched directories that are now empty; `sweep` is a
//! shallower net that removes any empty immediate child of the source root,
//! whether or not the walk ever touched it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::dir_is_empty;

/// Delete each touched directory that is now empty.
///
/// The source root itself is never deleted, and a directory that still holds
/// any entry (file or subdirectory) is left in place. A failure on one
/// directory is logged and does not stop the others.
pub fn reap(touched: &HashSet<PathBuf>, source_base: &Path, dry_run: bool) {
    for dir in touched {
        if dir == source_base {
            continue;
        }
        match dir_is_empty(dir) {
            Ok(true) => {}
            Ok(false) => {
                debug!(dir = %dir.display(), "Directory still has entries, leaving in place");
                continue;
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Could not inspect directory");
                continue;
            }
        }
        if dry_run {
            info!(dir = %dir.display(), "Dry-run: would remove emptied directory");
            continue;
        }
        // Emptiness was checked just above; remove_dir_all still copes with
        // entries that appeared in between.
        match fs::remove_dir_all(dir) {
            Ok(()) => info!(dir = %dir.display(), "Removed emptied directory"),
            Err(e) => warn!(dir = %dir.display(), error = %e, "Failed to remove directory"),
        }
    }
}

/// One shallow pass over the immediate children of the source root, removing
/// any that are empty. Catches directories that were empty before the run or
/// became empty outside the walk's bookkeeping. Errors are logged, not raised.
pub fn sweep(source_base: &Path, dry_run: bool) {
    let entries = match fs::read_dir(source_base) {
        Ok(it) => it,
        Err(e) => {
            warn!(dir = %source_base.display(), error = %e, "Could not list source root for sweep");
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry during sweep");
                continue;
            }
        };
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        let path = entry.path();
        match dir_is_empty(&path) {
            Ok(true) => {
                if dry_run {
                    info!(dir = %path.display(), "Dry-run: would remove empty directory");
                    continue;
                }
                match fs::remove_dir_all(&path) {
                    Ok(()) => info!(dir = %path.display(), "Found and removed empty directory"),
                    Err(e) => {
                        warn!(dir = %path.display(), error = %e, "Failed to remove empty directory");
                    }
                }
            }
            Ok(false) => {}
            Err(e) => {
                warn!(dir = %path.display(), error = %e, "Could not inspect directory during sweep");
            }
        }
    }
}
