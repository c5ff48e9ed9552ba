//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template when no config exists yet.
//!
//! This module only reads/writes the config file; directory validation
//! happens in `validate`.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::CONFIG_ENV;
use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{LogLevel, PartialSettings};

/// Struct mirroring the XML config file for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
struct XmlSettings {
    source_base: Option<String>,
    target_base: Option<String>,
    extension: Option<String>,
    pattern: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl XmlSettings {
    fn into_partial(self) -> PartialSettings {
        PartialSettings {
            source_base: self
                .source_base
                .as_deref()
                .and_then(non_empty)
                .map(PathBuf::from),
            target_base: self
                .target_base
                .as_deref()
                .and_then(non_empty)
                .map(PathBuf::from),
            extension: self
                .extension
                .as_deref()
                .and_then(non_empty)
                .map(str::to_owned),
            pattern: self
                .pattern
                .as_deref()
                .and_then(non_empty)
                .map(str::to_owned),
            log_level: self
                .log_level
                .as_deref()
                .and_then(non_empty)
                .and_then(LogLevel::parse),
            log_file: self
                .log_file
                .as_deref()
                .and_then(non_empty)
                .map(PathBuf::from),
            dry_run: false,
        }
    }
}

/// Path of the config file in use: $GATHERUP_CONFIG if set, else the
/// OS-appropriate default location.
pub fn config_path_in_use() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// Load settings from a specific XML file.
pub fn load_partial_from_path(path: &Path) -> Result<PartialSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlSettings = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(parsed.into_partial())
}

/// Load settings from the config file in use. Ok(None) if no file exists.
pub fn load_partial() -> Result<Option<PartialSettings>> {
    let Some(path) = config_path_in_use() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_partial_from_path(&path).map(Some)
}

/// Write a commented template config, creating the parent directory.
/// Refuses when an existing ancestor of the path is a symlink.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/gatherup.log".into());

    let content = format!(
        "<!--\n  gatherup configuration (XML)\n\n  Required:\n    source_base  -> directory tree scanned for candidate files\n    target_base  -> flat directory the matches are moved into\n    extension    -> file extension without the leading dot (case-insensitive)\n    pattern      -> text matched case-insensitively against file names (regex or literal)\n\n  Optional:\n    log_level    -> quiet | normal | info | debug\n    log_file     -> path to log file (stdout is always used)\n\n  CLI flags override these values.\n-->\n<config>\n  <source_base>/path/to/source</source_base>\n  <target_base>/path/to/target</target_base>\n  <extension>zip</extension>\n  <pattern>text-to-match</pattern>\n  <log_level>normal</log_level>\n  <log_file>{suggested_log}</log_file>\n</config>\n"
    );

    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create the default config if $GATHERUP_CONFIG is unset and none exists;
/// returns the created path so the CLI can point the user at it.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }

    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}
