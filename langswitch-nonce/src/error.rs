use thiserror::Error;

#[derive(Error, Debug)]
pub enum NonceError {
    #[error("Missing form token")]
    MissingToken,

    #[error("Malformed form token: {0}")]
    Malformed(String),

    #[error("Form token signature mismatch")]
    BadSignature,

    #[error("Form token issued for action {found:?}, expected {expected:?}")]
    WrongAction { expected: String, found: String },

    #[error("Form token issued to another principal")]
    WrongPrincipal,

    #[error("Form token expired")]
    Expired,

    #[error("Invalid token lifetime: {0} seconds")]
    InvalidTtl(i64),

    #[error("Invalid signing secret: {0}")]
    InvalidSecret(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, NonceError>;
