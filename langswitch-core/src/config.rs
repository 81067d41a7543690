//! Plugin configuration
//!
//! Loaded from defaults, a TOML document, and `LANGSWITCH_*` environment
//! variables (optionally seeded from a `.env` file), in that order.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "LANGSWITCH_";

/// Shortest accepted signing secret, in bytes.
const MIN_SECRET_LEN: usize = 32;

/// Longest accepted form token lifetime: one year.
pub const MAX_NONCE_TTL_SECS: i64 = 365 * 86_400;

type Result<T> = std::result::Result<T, ConfigError>;

/// Plugin configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangSwitchConfig {
    /// Metadata key holding the per-entry override
    pub meta_key: String,

    /// Translation domain of the plugin's own labels
    pub text_domain: String,

    /// Directory holding `<domain>-<locale>.json` catalogs
    pub languages_dir: PathBuf,

    /// Entry types managed before the supported-types filter runs
    pub default_entry_types: Vec<String>,

    /// Lifetime of form tokens in seconds
    pub nonce_ttl_secs: i64,

    /// Token signing secret; generated per process when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce_secret: Option<String>,
}

impl Default for LangSwitchConfig {
    fn default() -> Self {
        Self {
            meta_key: "_html_lang_locale".to_string(),
            text_domain: "html-lang-switcher".to_string(),
            languages_dir: PathBuf::from("languages"),
            default_entry_types: vec!["post".to_string(), "page".to_string()],
            nonce_ttl_secs: 86_400,
            nonce_secret: None,
        }
    }
}

impl LangSwitchConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Defaults overlaid with the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::default().with_env_vars(std::env::vars())
    }

    /// Overlay `LANGSWITCH_*` variables from any source.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value: String = value.into();

            match name {
                "META_KEY" => self.meta_key = value,
                "TEXT_DOMAIN" => self.text_domain = value,
                "LANGUAGES_DIR" => self.languages_dir = PathBuf::from(value),
                "ENTRY_TYPES" => {
                    self.default_entry_types = value
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "NONCE_TTL_SECS" => {
                    self.nonce_ttl_secs =
                        value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                            key: key.as_ref().to_string(),
                            value: value.clone(),
                        })?;
                }
                "NONCE_SECRET" => self.nonce_secret = Some(value),
                _ => {}
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Check invariants.
    pub fn validate(&self) -> Result<()> {
        if self.meta_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "meta_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.text_domain.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "text_domain",
                reason: "must not be empty".to_string(),
            });
        }
        if !(1..=MAX_NONCE_TTL_SECS).contains(&self.nonce_ttl_secs) {
            return Err(ConfigError::ValidationError {
                field: "nonce_ttl_secs",
                reason: format!(
                    "must be between 1 and {MAX_NONCE_TTL_SECS}, got {}",
                    self.nonce_ttl_secs
                ),
            });
        }
        if let Some(secret) = &self.nonce_secret {
            if secret.len() < MIN_SECRET_LEN {
                return Err(ConfigError::ValidationError {
                    field: "nonce_secret",
                    reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
                });
            }
        }
        Ok(())
    }

    /// Set metadata key
    pub fn with_meta_key(mut self, key: impl Into<String>) -> Self {
        self.meta_key = key.into();
        self
    }

    /// Set languages directory
    pub fn with_languages_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.languages_dir = dir.into();
        self
    }

    /// Set default entry types
    pub fn with_entry_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_entry_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set token lifetime
    pub fn with_nonce_ttl(mut self, ttl_secs: i64) -> Self {
        self.nonce_ttl_secs = ttl_secs;
        self
    }

    /// Set token signing secret
    pub fn with_nonce_secret(mut self, secret: impl Into<String>) -> Self {
        self.nonce_secret = Some(secret.into());
        self
    }
}
