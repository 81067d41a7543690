//! Error types for locale operations

use thiserror::Error;

/// Errors that can occur while handling locales and catalogs.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// Value does not match the locale code pattern
    #[error("Invalid locale: {0:?}")]
    InvalidLocale(String),

    /// Failed to read a message catalog
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Message catalog is not valid JSON
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Message catalog has an unexpected shape
    #[error("Failed to parse message catalog: {0}")]
    ParseError(String),
}
