use crate::error::{NonceError, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signed claims carried by a form token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormToken {
    /// Action the token authorises
    pub action: String,

    /// Principal the token was issued to
    pub subject: u64,

    /// Token expiration timestamp
    pub expires_at: DateTime<Utc>,

    /// Random salt so repeated tokens differ
    pub salt: String,
}

impl FormToken {
    /// Issue a token for an action and principal
    pub fn generate(action: impl Into<String>, subject: u64, ttl_seconds: i64) -> Result<Self> {
        Self::generate_at(action, subject, ttl_seconds, Utc::now())
    }

    /// Issue a token as if at `now`.
    ///
    /// Fails with [`NonceError::InvalidTtl`] when the expiry is not representable.
    pub fn generate_at(
        action: impl Into<String>,
        subject: u64,
        ttl_seconds: i64,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let expires_at = Duration::try_seconds(ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(NonceError::InvalidTtl(ttl_seconds))?;

        let mut rng = rand::thread_rng();
        let salt_bytes: [u8; 12] = rng.r#gen();

        Ok(Self {
            action: action.into(),
            subject,
            expires_at,
            salt: URL_SAFE_NO_PAD.encode(salt_bytes),
        })
    }

    /// Check if token is expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Encode to `<payload>.<signature>`, both base64url.
    pub fn encode(&self, secret: &[u8]) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = URL_SAFE_NO_PAD.encode(Self::mac(&payload, secret)?.finalize().into_bytes());
        Ok(format!("{payload}.{signature}"))
    }

    /// Decode and check the signature. Expiry and scope are not checked here.
    pub fn decode(encoded: &str, secret: &[u8]) -> Result<Self> {
        let (payload, signature) = encoded
            .trim()
            .split_once('.')
            .ok_or_else(|| NonceError::Malformed("missing signature".to_string()))?;

        let signature = URL_SAFE_NO_PAD.decode(signature)?;
        Self::mac(payload, secret)?
            .verify_slice(&signature)
            .map_err(|_| NonceError::BadSignature)?;

        let json = URL_SAFE_NO_PAD.decode(payload)?;
        Ok(serde_json::from_slice(&json)?)
    }

    fn mac(payload: &str, secret: &[u8]) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| NonceError::InvalidSecret(e.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(mac)
    }
}
