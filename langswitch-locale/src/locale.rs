//! Locale Codes
//!
//! A locale code is a lowercase language subtag of two or three letters,
//! optionally followed by a hyphen and an uppercase two-letter region.
//! This is the only shape accepted as a per-entry override.

use crate::{LocaleError, Result, TextDirection};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pattern a stored override must match.
pub const LOCALE_PATTERN: &str = r"^[a-z]{2,3}(-[A-Z]{2})?$";

static LOCALE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(LOCALE_PATTERN).unwrap());

/// A validated locale override (e.g. `en`, `es-AR`, `fil-PH`).
///
/// # Examples
///
/// ```
/// use langswitch_locale::LocaleCode;
///
/// let code = LocaleCode::parse("de-DE").unwrap();
/// assert_eq!(code.as_str(), "de-DE");
/// assert_eq!(code.region(), Some("DE"));
///
/// assert!(LocaleCode::parse("de-de").is_err());
/// assert!(LocaleCode::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse a locale code, rejecting anything outside the pattern.
    ///
    /// The input is taken verbatim: no trimming, no case folding.
    pub fn parse(value: &str) -> Result<Self> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(LocaleError::InvalidLocale(value.to_string()))
        }
    }

    /// Check a string against the locale pattern.
    pub fn is_valid(value: &str) -> bool {
        LOCALE_REGEX.is_match(value)
    }

    /// The code as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Region subtag, if present.
    pub fn region(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, region)| region)
    }

    /// Writing direction for this locale.
    pub fn direction(&self) -> TextDirection {
        TextDirection::of(&self.0)
    }

    /// Consume into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self> {
        LocaleCode::parse(s)
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(LocaleError::InvalidLocale(value))
        }
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
