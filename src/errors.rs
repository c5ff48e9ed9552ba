//! Typed error definitions for gatherup.
//! Provides a small set of well-known failure modes for better logs and tests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("Required setting '{0}' was not provided (flag or config file)")]
    MissingSetting(&'static str),

    #[error("Name pattern '{pattern}' could not be compiled: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
