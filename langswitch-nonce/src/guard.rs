use crate::{config::NonceConfig, error::NonceError, token::FormToken};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::trace;

type Result<T> = std::result::Result<T, NonceError>;

/// An action name paired with the form field carrying its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonceScope {
    /// Action the token authorises
    pub action: &'static str,
    /// Form field name
    pub field: &'static str,
}

impl NonceScope {
    /// Create a scope
    pub const fn new(action: &'static str, field: &'static str) -> Self {
        Self { action, field }
    }
}

/// Issues and checks form tokens.
#[derive(Debug, Clone)]
pub struct NonceGuard {
    config: Arc<NonceConfig>,
}

impl NonceGuard {
    /// Create a guard
    pub fn new(config: NonceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &NonceConfig {
        &self.config
    }

    /// Issue an encoded token for an action
    pub fn issue(&self, action: &str, subject: u64) -> Result<String> {
        trace!(action, subject, "Issuing form token");
        FormToken::generate(action, subject, self.config.token_ttl)?.encode(&self.config.secret)
    }

    /// Hidden input carrying a fresh token for a scope
    pub fn hidden_field(&self, scope: NonceScope, subject: u64) -> Result<String> {
        let token = self.issue(scope.action, subject)?;
        Ok(format!(
            r#"<input type="hidden" id="{field}" name="{field}" value="{token}" />"#,
            field = scope.field
        ))
    }

    /// Check a token against an action and principal
    pub fn verify(&self, encoded: &str, action: &str, subject: u64) -> Result<FormToken> {
        self.verify_at(encoded, action, subject, Utc::now())
    }

    /// [`NonceGuard::verify`] as if at `now`
    pub fn verify_at(
        &self,
        encoded: &str,
        action: &str,
        subject: u64,
        now: DateTime<Utc>,
    ) -> Result<FormToken> {
        if encoded.trim().is_empty() {
            return Err(NonceError::MissingToken);
        }

        let token = FormToken::decode(encoded, &self.config.secret)?;
        if token.action != action {
            return Err(NonceError::WrongAction {
                expected: action.to_string(),
                found: token.action,
            });
        }
        if token.subject != subject {
            return Err(NonceError::WrongPrincipal);
        }
        if token.is_expired_at(now) {
            return Err(NonceError::Expired);
        }
        Ok(token)
    }

    /// Check the value submitted in a scope's field
    pub fn verify_submitted(
        &self,
        submitted: Option<&str>,
        scope: NonceScope,
        subject: u64,
    ) -> Result<FormToken> {
        let encoded = submitted.ok_or(NonceError::MissingToken)?;
        self.verify(encoded, scope.action, subject)
    }
}

impl Default for NonceGuard {
    fn default() -> Self {
        Self::new(NonceConfig::default())
    }
}
