//! Settings validation.
//! Verifies the source tree is readable, the target exists and is writable,
//! and that the two bases are disjoint, before any file is touched.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};

use super::types::Settings;

impl Settings {
    /// Validate existence, readability/writability and canonical paths.
    /// Runs before the walk; a failure here means nothing has been moved.
    pub fn validate(&self) -> Result<()> {
        let source = &self.source_base;
        let target = &self.target_base;

        // 1) Source base: must exist, be a directory, and be readable.
        ensure_dir_exists_and_is_dir(source, "source_base")?;
        ensure_readable(source, "source_base")?;

        // 2) Target base: must be a directory; create if missing; ensure writable.
        ensure_dir_is_or_create(target, "target_base")?;
        ensure_writable(target, "target_base")?;

        // 3) Resolve symlinks and ensure the bases are disjoint. A target
        //    inside the source would be re-enumerated by the walk.
        let source_real = fs::canonicalize(source).unwrap_or_else(|_| source.clone());
        let target_real = fs::canonicalize(target).unwrap_or_else(|_| target.clone());

        if source_real == target_real {
            bail!(
                "source_base and target_base resolve to the same path: '{}'",
                source_real.display()
            );
        }
        if target_real.starts_with(&source_real) {
            bail!(
                "target_base '{}' must not be inside source_base '{}'",
                target_real.display(),
                source_real.display()
            );
        }
        if source_real.starts_with(&target_real) {
            bail!(
                "source_base '{}' must not be inside target_base '{}'",
                source_real.display(),
                target_real.display()
            );
        }

        info!(
            "Settings validated: source='{}' target='{}' extension='{}' pattern='{}'",
            source.display(),
            target.display(),
            self.extension,
            self.pattern
        );
        Ok(())
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    fs::read_dir(path).with_context(|| {
        format!(
            "Cannot read {name} directory '{}'; check permissions",
            path.display()
        )
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}

/// Ensure directory exists (create if missing). If exists, it must be a directory.
fn ensure_dir_is_or_create(path: &Path, name: &str) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            error!("{name} exists but isn't a directory: {}", path.display());
            bail!("{name} exists but isn't a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create {name} directory '{}'", path.display()))?;
        info!("Created {name} directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is writable using a non-destructive probe file.
fn ensure_writable(path: &Path, name: &str) -> Result<()> {
    writable_probe(path).with_context(|| {
        format!(
            "Cannot write to {name} '{}'; check permissions",
            path.display()
        )
    })?;
    debug!("{name} writable: {}", path.display());
    Ok(())
}

/// Create and immediately remove a uniquely named probe file.
fn writable_probe(dir: &Path) -> io::Result<()> {
    let probe = dir.join(format!(".gatherup_probe_{}.tmp", std::process::id()));
    fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&probe)?;
    let _ = fs::remove_file(&probe);
    Ok(())
}
