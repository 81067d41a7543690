//! # Form tokens
//!
//! Forgery protection for the plugin's admin forms. Each token is scoped to
//! one action, bound to the principal it was rendered for, and carries its
//! own expiry, all under an HMAC-SHA256 signature.
//!
//! ## Quick Start
//!
//! ```rust
//! use langswitch_nonce::{NonceConfig, NonceGuard, NonceScope};
//!
//! const SAVE: NonceScope = NonceScope::new("hls_save_meta", "hls_nonce");
//!
//! let guard = NonceGuard::new(NonceConfig::ephemeral().with_token_ttl(3600).unwrap());
//!
//! // Render the hidden field into a form
//! let field = guard.hidden_field(SAVE, 42).unwrap();
//! assert!(field.contains(r#"name="hls_nonce""#));
//!
//! // Check a submitted token
//! let token = guard.issue(SAVE.action, 42).unwrap();
//! assert!(guard.verify_submitted(Some(token.as_str()), SAVE, 42).is_ok());
//! assert!(guard.verify_submitted(Some(token.as_str()), SAVE, 7).is_err());
//! ```
//!
//! ## Token Format
//!
//! ```rust
//! use langswitch_nonce::FormToken;
//!
//! let secret = b"0123456789abcdef0123456789abcdef";
//! let token = FormToken::generate("hls_bulk_save", 1, 3600).unwrap();
//!
//! // `<payload>.<signature>`, both base64url without padding
//! let encoded = token.encode(secret).unwrap();
//! assert_eq!(FormToken::decode(&encoded, secret).unwrap(), token);
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod token;

pub use config::{MAX_TOKEN_TTL, MIN_SECRET_LEN, NonceConfig};
pub use error::{NonceError, Result};
pub use guard::{NonceGuard, NonceScope};
pub use token::FormToken;
