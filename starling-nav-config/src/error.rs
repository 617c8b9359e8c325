//! Typed error variants for the starling-nav-config crate.
//!
//! Callers at the crate boundary can match on specific failure modes instead
//! of opaque `anyhow` strings. `NavConfig::load` / `NavConfig::save` still
//! return `anyhow::Result`; `ConfigError` values coerce automatically via the
//! blanket `From` impl `anyhow` provides for any `std::error::Error`.

use thiserror::Error;

/// Errors produced while loading, saving, or validating navigation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading navigation config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained YAML that could not be parsed.
    #[error("YAML parse error in navigation config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A config value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Navigation config validation error: {0}")]
    Validation(String),
}
