//! Error types for growth-projector
//!
//! The projection itself is total; errors only arise at the edges
//! (configuration files, strict parsing of user-supplied codes, chart export).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type ProjectorResult<T> = Result<T, ProjectorError>;

/// Main error type for library operations
#[derive(Error, Debug)]
pub enum ProjectorError {
    /// Config file could not be parsed as TOML
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Currency code outside the supported set
    #[error("unsupported currency '{code}' (expected one of ILS, USD, EUR)")]
    UnknownCurrency { code: String },

    /// Duration unit outside the supported set
    #[error("unsupported duration unit '{unit}' (expected months or years)")]
    UnknownDurationUnit { unit: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart specification could not be serialized
    #[error("chart serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
