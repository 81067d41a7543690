//! In-memory host doubles
//!
//! Enough of a host to drive the plugin end to end in tests or in a
//! standalone embedding.

use crate::{
    ContentRepository, Entry, EntryId, HostError, HostServices, MetaStore, Principal, Result,
    RuntimeProbe, SiteSettings,
};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Metadata store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    values: RwLock<HashMap<(EntryId, String), String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryMetaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting a write
    pub fn seed(&self, entry: impl Into<EntryId>, key: &str, value: &str) {
        self.values
            .write()
            .insert((entry.into(), key.to_string()), value.to_string());
    }

    /// Make every following update/delete fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful updates and deletes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HostError::Storage("writes disabled".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl MetaStore for MemoryMetaStore {
    fn get(&self, entry: EntryId, key: &str) -> Option<String> {
        self.values.read().get(&(entry, key.to_string())).cloned()
    }

    fn update(&self, entry: EntryId, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.values
            .write()
            .insert((entry, key.to_string()), value.to_string());
        Ok(())
    }

    fn delete(&self, entry: EntryId, key: &str) -> Result<()> {
        self.check_writable()?;
        self.values.write().remove(&(entry, key.to_string()));
        Ok(())
    }
}

/// Entries and permalinks backed by a map.
#[derive(Debug, Default)]
pub struct MemoryContent {
    entries: RwLock<HashMap<EntryId, Entry>>,
    base_url: String,
}

impl MemoryContent {
    /// Permalinks are `<base_url>/?p=<id>`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            base_url: base_url.into(),
        }
    }

    /// Add an entry
    pub fn insert(&self, entry: Entry) {
        self.entries.write().insert(entry.id, entry);
    }

    /// Builder form of [`MemoryContent::insert`]
    pub fn with(self, entry: Entry) -> Self {
        self.insert(entry);
        self
    }
}

impl ContentRepository for MemoryContent {
    fn entry(&self, id: EntryId) -> Option<Entry> {
        self.entries.read().get(&id).cloned()
    }

    fn permalink(&self, id: EntryId) -> Option<String> {
        self.entries
            .read()
            .contains_key(&id)
            .then(|| format!("{}/?p={}", self.base_url.trim_end_matches('/'), id))
    }
}

/// Principal with a fixed capability set.
#[derive(Debug, Clone, Default)]
pub struct StaticPrincipal {
    id: u64,
    edit_all: bool,
    editable: HashSet<EntryId>,
}

impl StaticPrincipal {
    /// May edit everything
    pub fn editor(id: u64) -> Self {
        Self {
            id,
            edit_all: true,
            editable: HashSet::new(),
        }
    }

    /// May edit only the listed entries
    pub fn limited<I: IntoIterator<Item = u64>>(id: u64, entries: I) -> Self {
        Self {
            id,
            edit_all: false,
            editable: entries.into_iter().map(EntryId).collect(),
        }
    }

    /// May edit nothing
    pub fn visitor() -> Self {
        Self::default()
    }

    /// Share as a trait object
    pub fn shared(self) -> Arc<dyn Principal> {
        Arc::new(self)
    }
}

impl Principal for StaticPrincipal {
    fn id(&self) -> u64 {
        self.id
    }

    fn can_edit_entry(&self, entry: EntryId) -> bool {
        self.edit_all || self.editable.contains(&entry)
    }

    fn can_edit_entries(&self) -> bool {
        self.edit_all || !self.editable.is_empty()
    }
}

/// Site with a fixed locale.
#[derive(Debug, Clone)]
pub struct StaticSite {
    locale: String,
}

impl StaticSite {
    /// Create with an ambient locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl SiteSettings for StaticSite {
    fn locale(&self) -> String {
        self.locale.clone()
    }
}

/// Probe answering from fixed sets of names.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    constants: HashSet<String>,
    classes: HashSet<String>,
}

impl StaticProbe {
    /// Nothing installed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a defined constant
    pub fn with_constant(mut self, name: impl Into<String>) -> Self {
        self.constants.insert(name.into());
        self
    }

    /// Add a loaded class
    pub fn with_class(mut self, name: impl Into<String>) -> Self {
        self.classes.insert(name.into());
        self
    }
}

impl RuntimeProbe for StaticProbe {
    fn constant_defined(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    fn class_exists(&self, name: &str) -> bool {
        self.classes.contains(name)
    }
}

/// A complete in-memory host.
#[derive(Clone)]
pub struct TestHost {
    /// Metadata store
    pub meta: Arc<MemoryMetaStore>,
    /// Entries
    pub content: Arc<MemoryContent>,
    /// Site settings
    pub site: Arc<StaticSite>,
}

impl TestHost {
    /// Empty host with the given ambient locale
    pub fn new(site_locale: &str) -> Self {
        Self {
            meta: Arc::new(MemoryMetaStore::new()),
            content: Arc::new(MemoryContent::new("https://example.com")),
            site: Arc::new(StaticSite::new(site_locale)),
        }
    }

    /// Add an entry
    pub fn with_entry(self, entry: Entry) -> Self {
        self.content.insert(entry);
        self
    }

    /// Trait-object view for the plugin
    pub fn services(&self) -> HostServices {
        HostServices::new(self.meta.clone(), self.content.clone(), self.site.clone())
    }
}
