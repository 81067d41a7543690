//! Message Catalogs
//!
//! Translations for the plugin's own admin labels. Catalogs are flat JSON
//! objects mapping the English source string to its translation, stored as
//! `<domain>-<locale>.json` in a languages directory.

use crate::{LocaleError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Translations for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut catalog = Self::new();

        for (msgid, value) in data {
            match value {
                serde_json::Value::String(msgstr) => {
                    catalog.messages.insert(msgid, msgstr);
                }
                other => {
                    return Err(LocaleError::ParseError(format!(
                        "translation for {msgid:?} must be a string, got {other}"
                    )));
                }
            }
        }

        Ok(catalog)
    }

    /// Load from a JSON file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Add a translation.
    pub fn insert(&mut self, msgid: impl Into<String>, msgstr: impl Into<String>) {
        self.messages.insert(msgid.into(), msgstr.into());
    }

    /// Translation for a source string.
    pub fn get(&self, msgid: &str) -> Option<&str> {
        self.messages.get(msgid).map(|s| s.as_str())
    }

    /// Number of translations
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A named translation domain with at most one active catalog.
///
/// Untranslated strings are returned unchanged.
///
/// ```
/// use langswitch_locale::{MessageCatalog, TextDomain};
///
/// let ru = MessageCatalog::from_json(r#"{"Lang": "Язык"}"#).unwrap();
/// let domain = TextDomain::new("html-lang-switcher").with_builtin("ru", ru);
///
/// assert_eq!(domain.translate("Lang"), "Lang");
/// domain.activate("ru_RU");
/// assert_eq!(domain.translate("Lang"), "Язык");
/// ```
#[derive(Debug)]
pub struct TextDomain {
    name: String,
    builtin: HashMap<String, MessageCatalog>,
    active: RwLock<Option<(String, MessageCatalog)>>,
}

impl TextDomain {
    /// Create a domain with no catalogs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            builtin: HashMap::new(),
            active: RwLock::new(None),
        }
    }

    /// Register a compiled-in catalog used when no file is found.
    pub fn with_builtin(mut self, locale: impl Into<String>, catalog: MessageCatalog) -> Self {
        self.builtin.insert(locale.into(), catalog);
        self
    }

    /// Domain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locale of the active catalog, if any.
    pub fn active_locale(&self) -> Option<String> {
        self.active.read().as_ref().map(|(locale, _)| locale.clone())
    }

    /// Activate the best built-in catalog for a site locale.
    ///
    /// Returns whether a catalog became active.
    pub fn activate(&self, site_locale: &str) -> bool {
        for candidate in candidates(site_locale) {
            if let Some(catalog) = self.builtin.get(&candidate) {
                self.set_active(candidate, catalog.clone());
                return true;
            }
        }
        self.active.write().take();
        false
    }

    /// Load the catalog for a site locale from a languages directory.
    ///
    /// Looks for `<domain>-<locale>.json` using the locale as given, with
    /// `-` separators, then the bare language. Falls back to built-in
    /// catalogs. A missing directory or file is not an error; an unreadable
    /// or malformed file is.
    pub fn load(&self, dir: impl AsRef<Path>, site_locale: &str) -> Result<bool> {
        let dir = dir.as_ref();

        for candidate in candidates(site_locale) {
            let path = dir.join(format!("{}-{}.json", self.name, candidate));
            if !path.is_file() {
                continue;
            }

            let catalog = MessageCatalog::load_file(&path)?;
            info!(
                domain = %self.name,
                locale = %candidate,
                path = %path.display(),
                "Loaded message catalog"
            );
            self.set_active(candidate, catalog);
            return Ok(true);
        }

        debug!(domain = %self.name, site_locale, "No catalog file, trying built-in catalogs");
        Ok(self.activate(site_locale))
    }

    /// Translate a source string.
    pub fn translate(&self, msgid: &str) -> String {
        self.active
            .read()
            .as_ref()
            .and_then(|(_, catalog)| catalog.get(msgid))
            .unwrap_or(msgid)
            .to_string()
    }

    fn set_active(&self, locale: String, catalog: MessageCatalog) {
        *self.active.write() = Some((locale, catalog));
    }
}

/// `ru_RU` → `["ru_RU", "ru-RU", "ru"]`, deduplicated, empty input yields nothing.
fn candidates(site_locale: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    if site_locale.is_empty() {
        return out;
    }

    let hyphenated = site_locale.replace('_', "-");
    let language = hyphenated.split('-').next().unwrap_or_default().to_string();

    for candidate in [site_locale.to_string(), hyphenated, language] {
        if !candidate.is_empty() && !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ru_catalog() -> MessageCatalog {
        MessageCatalog::from_json(r#"{"Lang": "Язык", "— No change —": "— Без изменений —"}"#)
            .unwrap()
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = ru_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Lang"), Some("Язык"));
        assert_eq!(catalog.get("Missing"), None);
    }

    #[test]
    fn test_catalog_rejects_non_strings() {
        let err = MessageCatalog::from_json(r#"{"Lang": 3}"#).unwrap_err();
        assert!(matches!(err, LocaleError::ParseError(_)));
        assert!(MessageCatalog::from_json("[]").is_err());
    }

    #[test]
    fn test_candidates() {
        assert_eq!(candidates("ru_RU"), vec!["ru_RU", "ru-RU", "ru"]);
        assert_eq!(candidates("ru"), vec!["ru"]);
        assert_eq!(candidates("es-AR"), vec!["es-AR", "es"]);
        assert!(candidates("").is_empty());
    }

    #[test]
    fn test_activate_builtin() {
        let domain = TextDomain::new("html-lang-switcher").with_builtin("ru", ru_catalog());

        assert!(domain.activate("ru_RU"));
        assert_eq!(domain.active_locale().as_deref(), Some("ru"));
        assert_eq!(domain.translate("Lang"), "Язык");
        assert_eq!(domain.translate("Untranslated"), "Untranslated");

        assert!(!domain.activate("de_DE"));
        assert_eq!(domain.active_locale(), None);
        assert_eq!(domain.translate("Lang"), "Lang");
    }

    #[test]
    fn test_load_prefers_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("html-lang-switcher-de-DE.json"),
            r#"{"Lang": "Sprache"}"#,
        )
        .unwrap();

        let domain = TextDomain::new("html-lang-switcher").with_builtin("de", MessageCatalog::new());
        assert!(domain.load(dir.path(), "de_DE").unwrap());
        assert_eq!(domain.active_locale().as_deref(), Some("de-DE"));
        assert_eq!(domain.translate("Lang"), "Sprache");
    }

    #[test]
    fn test_load_missing_dir_falls_back() {
        let domain = TextDomain::new("html-lang-switcher").with_builtin("ru", ru_catalog());
        assert!(domain.load("/nonexistent/languages", "ru_RU").unwrap());
        assert_eq!(domain.translate("Lang"), "Язык");

        assert!(!domain.load("/nonexistent/languages", "fr_FR").unwrap());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("html-lang-switcher-it.json"), "{not json").unwrap();

        let domain = TextDomain::new("html-lang-switcher");
        assert!(matches!(
            domain.load(dir.path(), "it_IT"),
            Err(LocaleError::JsonError(_))
        ));
    }
}
