use crate::error::{NonceError, Result};

/// Shortest accepted signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL: i64 = 365 * 86_400;

/// Form token configuration
#[derive(Debug, Clone)]
pub struct NonceConfig {
    /// Secret key for token signing (must be at least 32 bytes)
    pub secret: Vec<u8>,

    /// Token time-to-live in seconds
    pub token_ttl: i64,
}

impl NonceConfig {
    /// Create a new configuration
    pub fn new(secret: Vec<u8>) -> Result<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(NonceError::InvalidSecret(format!(
                "secret key must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        Ok(Self {
            secret,
            token_ttl: 86_400, // 24 hours
        })
    }

    /// Configuration with a freshly generated secret.
    ///
    /// Tokens issued under it do not survive a restart.
    pub fn ephemeral() -> Self {
        Self {
            secret: Self::generate_secret(),
            token_ttl: 86_400,
        }
    }

    /// Generate a secret key
    pub fn generate_secret() -> Vec<u8> {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        (0..MIN_SECRET_LEN).map(|_| rng.r#gen()).collect()
    }

    /// Set token TTL; must be within `1..=MAX_TOKEN_TTL`
    pub fn with_token_ttl(mut self, ttl_seconds: i64) -> Result<Self> {
        if !(1..=MAX_TOKEN_TTL).contains(&ttl_seconds) {
            return Err(NonceError::InvalidTtl(ttl_seconds));
        }
        self.token_ttl = ttl_seconds;
        Ok(self)
    }
}

impl Default for NonceConfig {
    fn default() -> Self {
        Self::ephemeral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let secret = NonceConfig::generate_secret();
        assert_eq!(secret.len(), 32);

        let config = NonceConfig::new(secret).unwrap();
        assert_eq!(config.token_ttl, 86_400);
    }

    #[test]
    fn test_config_builder() {
        let config = NonceConfig::default().with_token_ttl(600).unwrap();
        assert_eq!(config.token_ttl, 600);
    }

    #[test]
    fn test_ttl_bounds() {
        assert!(NonceConfig::default().with_token_ttl(MAX_TOKEN_TTL).is_ok());
        for ttl in [0, -1, MAX_TOKEN_TTL + 1, i64::MAX] {
            assert!(matches!(
                NonceConfig::default().with_token_ttl(ttl),
                Err(NonceError::InvalidTtl(t)) if t == ttl
            ));
        }
    }

    #[test]
    fn test_invalid_secret_length() {
        assert!(matches!(
            NonceConfig::new(vec![1, 2, 3]),
            Err(NonceError::InvalidSecret(_))
        ));
    }

    #[test]
    fn test_generated_secrets_differ() {
        assert_ne!(NonceConfig::generate_secret(), NonceConfig::generate_secret());
    }
}
