//! Host seams
//!
//! The plugin owns no storage, no users and no pages. These traits are the
//! whole contract it needs from the surrounding CMS.

use crate::{Entry, EntryId, Result};
use std::sync::Arc;

/// Per-entry key/value metadata.
///
/// Each call is atomic for a single key; nothing coordinates across entries.
pub trait MetaStore: Send + Sync {
    /// Read a value; `None` when absent.
    fn get(&self, entry: EntryId, key: &str) -> Option<String>;

    /// Create or replace a value.
    fn update(&self, entry: EntryId, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing an absent value succeeds.
    fn delete(&self, entry: EntryId, key: &str) -> Result<()>;
}

/// Lookup of entries and their public addresses.
pub trait ContentRepository: Send + Sync {
    /// Fetch an entry by id.
    fn entry(&self, id: EntryId) -> Option<Entry>;

    /// Canonical public URL of an entry.
    fn permalink(&self, id: EntryId) -> Option<String>;
}

/// The acting user of a request.
pub trait Principal: Send + Sync {
    /// Stable identifier; zero for anonymous visitors.
    fn id(&self) -> u64;

    /// May edit this particular entry.
    fn can_edit_entry(&self, entry: EntryId) -> bool;

    /// May edit entries in general.
    fn can_edit_entries(&self) -> bool;
}

/// Site-wide settings.
pub trait SiteSettings: Send + Sync {
    /// Ambient default locale, in host format (e.g. `en_US`).
    fn locale(&self) -> String;
}

/// Probe for other installed extensions.
pub trait RuntimeProbe: Send + Sync {
    /// A named constant is defined.
    fn constant_defined(&self, name: &str) -> bool;

    /// A named class is loaded.
    fn class_exists(&self, name: &str) -> bool;
}

/// Long-lived host collaborators shared by every handler.
#[derive(Clone)]
pub struct HostServices {
    /// Metadata store
    pub meta: Arc<dyn MetaStore>,
    /// Content lookup
    pub content: Arc<dyn ContentRepository>,
    /// Site settings
    pub site: Arc<dyn SiteSettings>,
}

impl HostServices {
    /// Bundle host collaborators
    pub fn new(
        meta: Arc<dyn MetaStore>,
        content: Arc<dyn ContentRepository>,
        site: Arc<dyn SiteSettings>,
    ) -> Self {
        Self { meta, content, site }
    }
}
