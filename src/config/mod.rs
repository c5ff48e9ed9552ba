//! Configuration: settings types, default paths, XML loading, and validation.
//! CLI flags override config-file values; the four migration settings are
//! required and have no defaults.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{LogLevel, PartialSettings, Settings};
pub use xml::{config_path_in_use, create_template_config, ensure_default_config_exists};

/// Environment variable naming an explicit config file location.
pub const CONFIG_ENV: &str = "GATHERUP_CONFIG";
