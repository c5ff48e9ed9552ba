//! Core library for `gatherup`.
//!
//! Walks a source tree for files of a configured extension whose base names
//! match a configured text, moves the matches into one flat target directory,
//! removes same-named duplicates, and prunes the subdirectories the run
//! emptied. The binary in `main.rs` is a thin CLI wrapper around this crate.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod shutdown;
pub mod summary;

pub use config::{LogLevel, PartialSettings, Settings};
pub use errors::GatherError;
pub use fs_ops::{RunReport, migrate, native_separators, reap, sweep};
