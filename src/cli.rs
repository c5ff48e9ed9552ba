//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//! CLI flags override config-file values.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::{LogLevel, PartialSettings};

/// Gather matching files out of a directory tree into one flat directory,
/// then prune the subdirectories the run emptied.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Gather matching files into one directory and prune emptied folders"
)]
pub struct Args {
    /// Directory tree to scan for candidate files.
    #[arg(long, short = 's', value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub source_base: Option<PathBuf>,

    /// Flat directory the matches are moved into (created if missing).
    #[arg(long, short = 't', value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub target_base: Option<PathBuf>,

    /// File extension to match, without the leading dot (case-insensitive).
    #[arg(long, short = 'e', value_name = "EXT")]
    pub extension: Option<String>,

    /// Text tested case-insensitively against file names (regex or literal).
    #[arg(long, short = 'p', value_name = "TEXT")]
    pub pattern: Option<String>,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write log records to this file in addition to stdout.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Print the config file location used by gatherup and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Show what would be done, but do not modify files/directories.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// The CLI's contribution to settings resolution (highest precedence).
    pub fn to_partial(&self) -> PartialSettings {
        PartialSettings {
            source_base: self.source_base.clone(),
            target_base: self.target_base.clone(),
            extension: self.extension.clone(),
            pattern: self.pattern.clone(),
            log_level: self.effective_log_level(),
            log_file: self.log_file.clone(),
            dry_run: self.dry_run,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
