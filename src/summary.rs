//! Run-summary logging, dispatched off the main thread.
//!
//! The summary is best-effort: the caller blocks for at most the given wait
//! and then moves on, leaving the thread to finish on its own. A timeout is
//! logged at warn level and is not a failure of the run.

use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::fs_ops::RunReport;

/// Bounded wait applied to the summary task in production runs.
pub const SUMMARY_WAIT: Duration = Duration::from_secs(60);

/// Spawn one thread that logs the run totals and every moved base name,
/// then wait for it up to `wait`.
pub fn dispatch(report: &RunReport, target_base: &Path, wait: Duration) {
    let moved = report.moved.clone();
    let duplicates_removed = report.duplicates_removed;
    let failures = report.failures;
    let target = target_base.to_path_buf();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        info!(
            target_dir = %target.display(),
            moved = moved.len(),
            duplicates_removed,
            failures,
            "Run summary: total files moved"
        );
        for name in &moved {
            info!(file = %name, "Moved");
        }
        let _ = tx.send(());
    });

    if rx.recv_timeout(wait).is_err() {
        warn!(
            "Summary logging did not finish within {}s; continuing",
            wait.as_secs()
        );
    }
}
