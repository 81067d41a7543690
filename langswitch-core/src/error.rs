//! Error types for host interaction and configuration

use thiserror::Error;

/// Errors reported by host collaborators.
#[derive(Error, Debug)]
pub enum HostError {
    /// Metadata store rejected a write
    #[error("Metadata store error: {0}")]
    Storage(String),

    /// Request body could not be decoded
    #[error("Malformed form body: {0}")]
    MalformedForm(String),
}

impl From<serde_urlencoded::de::Error> for HostError {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        HostError::MalformedForm(err.to_string())
    }
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a config file
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] std::io::Error),

    /// TOML could not be parsed
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Environment variable had an unusable value
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: String, value: String },

    /// Loaded configuration failed validation
    #[error("Validation error: {field}: {reason}")]
    ValidationError { field: &'static str, reason: String },
}
