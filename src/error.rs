//! Boot errors

use langswitch_core::ConfigError;
use langswitch_nonce::NonceError;
use thiserror::Error;

/// Errors that stop the plugin from booting.
#[derive(Error, Debug)]
pub enum BootError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Token signing could not be set up
    #[error("Form token setup failed: {0}")]
    Nonce(#[from] NonceError),
}

/// Result type for plugin boot
pub type Result<T> = std::result::Result<T, BootError>;
