//! Core configuration types.
//! - Settings holds the resolved values for one migration run.
//! - PartialSettings accumulates values from CLI and config file.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use crate::errors::GatherError;
use crate::fs_ops::native_separators;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Resolved settings for one migration run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory tree scanned for candidate files
    pub source_base: PathBuf,
    /// Flat directory the matches are moved into
    pub target_base: PathBuf,
    /// Extension without the leading dot; compared case-insensitively
    pub extension: String,
    /// Text tested case-insensitively against base names (regex or literal)
    pub pattern: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, log actions but do not modify the filesystem
    pub dry_run: bool,
}

impl Settings {
    /// Construct settings with explicit migration values; logging fields use
    /// defaults. Paths are separator-normalized, the extension is lowered and
    /// stripped of a leading dot, and the pattern is trimmed.
    pub fn new(
        source_base: impl Into<PathBuf>,
        target_base: impl Into<PathBuf>,
        extension: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            source_base: normalize_path(source_base.into()),
            target_base: normalize_path(target_base.into()),
            extension: clean_extension(&extension.into()),
            pattern: pattern.into().trim().to_string(),
            log_level: LogLevel::default(),
            log_file: None,
            dry_run: false,
        }
    }
}

/// Settings as accumulated from the CLI and the config file, before the
/// required values have been checked for presence.
#[derive(Debug, Clone, Default)]
pub struct PartialSettings {
    pub source_base: Option<PathBuf>,
    pub target_base: Option<PathBuf>,
    pub extension: Option<String>,
    pub pattern: Option<String>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub dry_run: bool,
}

impl PartialSettings {
    /// Fill unset fields from a lower-precedence source.
    pub fn or(mut self, lower: PartialSettings) -> Self {
        self.source_base = self.source_base.or(lower.source_base);
        self.target_base = self.target_base.or(lower.target_base);
        self.extension = self.extension.or(lower.extension);
        self.pattern = self.pattern.or(lower.pattern);
        self.log_level = self.log_level.or(lower.log_level);
        self.log_file = self.log_file.or(lower.log_file);
        self.dry_run = self.dry_run || lower.dry_run;
        self
    }

    /// Finalize into `Settings`, failing on the first missing required value.
    /// An extension or pattern that is empty after trimming counts as missing.
    pub fn resolve(self) -> Result<Settings, GatherError> {
        let source_base = self
            .source_base
            .ok_or(GatherError::MissingSetting("source_base"))?;
        let target_base = self
            .target_base
            .ok_or(GatherError::MissingSetting("target_base"))?;
        let extension = self
            .extension
            .ok_or(GatherError::MissingSetting("extension"))?;
        let pattern = self.pattern.ok_or(GatherError::MissingSetting("pattern"))?;

        let mut settings = Settings::new(source_base, target_base, extension, pattern);
        if settings.extension.is_empty() {
            return Err(GatherError::MissingSetting("extension"));
        }
        if settings.pattern.is_empty() {
            return Err(GatherError::MissingSetting("pattern"));
        }
        if let Some(level) = self.log_level {
            settings.log_level = level;
        }
        settings.log_file = self.log_file.or_else(paths::default_log_path);
        settings.dry_run = self.dry_run;
        Ok(settings)
    }
}

fn normalize_path(p: PathBuf) -> PathBuf {
    PathBuf::from(native_separators(&p.to_string_lossy()))
}

fn clean_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
