//! Error types for admin surfaces

use langswitch_nonce::NonceError;
use thiserror::Error;

/// Admin error types
#[derive(Error, Debug)]
pub enum AdminError {
    /// Form token could not be issued
    #[error("Form token error: {0}")]
    Nonce(#[from] NonceError),
}

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;
