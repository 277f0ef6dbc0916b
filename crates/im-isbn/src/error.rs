//! Error types for im-isbn

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ISBN operations
pub type Result<T> = std::result::Result<T, IsbnError>;

/// Errors returned by the formatter, converter, and extractor.
///
/// Every variant carries the offending input. Validators never produce these;
/// they answer `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// Formatter input is neither 10 nor 13 characters long
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// Conversion source fails the ISBN-10 checksum
    #[error("{0} is not ISBN10")]
    NotIsbn10(String),

    /// Conversion source fails the ISBN-13 checksum
    #[error("{0} is not ISBN13")]
    NotIsbn13(String),

    /// ISBN-13 under the 979 prefix, rejected when configured to do so
    #[error("{0} has no ISBN10 equivalent")]
    NoIsbn10Equivalent(String),

    /// No checksum-valid ISBN in the scanned text
    #[error("ISBN not found: {0}")]
    NotFound(String),
}

/// Errors raised while loading or saving an [`IsbnConfig`](crate::IsbnConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize TOML config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// File extension not recognised
    #[error("Unsupported config format: {0:?}")]
    UnsupportedFormat(PathBuf),
}
