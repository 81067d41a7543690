//! Locale Catalog
//!
//! The ordered set of locales an operator can pick from. The empty code is
//! the "inherit site default" choice and always sorts where it was inserted.

use serde::{Deserialize, Serialize};

/// Built-in locales after the "use default" entry, each labelled with its code.
pub const BASE_LOCALES: [&str; 7] = ["en", "ru", "es-ES", "es-AR", "en-IN", "it-IT", "de-DE"];

/// One selectable locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Value submitted and stored (empty for "use default")
    pub code: String,
    /// Display label
    pub label: String,
}

impl CatalogEntry {
    /// Create a new entry
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Ordered mapping from locale code to label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleCatalog {
    entries: Vec<CatalogEntry>,
}

impl LocaleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog, headed by the "use default" entry.
    pub fn base(default_label: impl Into<String>) -> Self {
        let mut catalog = Self::new();
        catalog.insert("", default_label);
        for code in BASE_LOCALES {
            catalog.insert(code, code);
        }
        catalog
    }

    /// Insert or replace an entry. Replacing keeps the original position.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) -> &mut Self {
        let code = code.into();
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.code == code) {
            Some(entry) => entry.label = label,
            None => self.entries.push(CatalogEntry { code, label }),
        }
        self
    }

    /// Put an entry first, removing any existing entry with the same code.
    pub fn prepend(&mut self, code: impl Into<String>, label: impl Into<String>) -> &mut Self {
        let entry = CatalogEntry::new(code, label);
        self.entries.retain(|e| e.code != entry.code);
        self.entries.insert(0, entry);
        self
    }

    /// Remove an entry, returning its label.
    pub fn remove(&mut self, code: &str) -> Option<String> {
        let idx = self.entries.iter().position(|e| e.code == code)?;
        Some(self.entries.remove(idx).label)
    }

    /// Label for a code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label.as_str())
    }

    /// Check if a code is present.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// All codes in display order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a LocaleCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<CatalogEntry> for LocaleCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry.code, entry.label);
        }
        catalog
    }
}
