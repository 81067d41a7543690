//! Host lifecycle events
//!
//! One struct per extension point. Inputs are public fields set by the host;
//! outputs (`html`, `output`, collections) start empty or at the host's
//! default and are rewritten by handlers.

use crate::{Entry, EntryId, Hook, RequestContext, Screen};
use langswitch_locale::LocaleCatalog;

macro_rules! hook_names {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(impl Hook for $ty {
            const NAME: &'static str = $name;
        })*
    };
}

hook_names! {
    PluginsLoaded => "plugins_loaded",
    SupportedEntryTypes => "supported_entry_types",
    SupportedLocales => "supported_locales",
    RegisterMetaBoxes => "add_meta_boxes",
    RenderMetaBox => "render_meta_box",
    SaveEntry => "save_entry",
    QuickEditBox => "quick_edit_custom_box",
    BulkEditBox => "bulk_edit_custom_box",
    EnqueueAdminAssets => "admin_enqueue_scripts",
    LoadListScreen => "load_list_screen",
    ListColumns => "manage_columns",
    RenderListColumn => "manage_custom_column",
    LanguageAttributes => "language_attributes",
    DocumentHead => "document_head",
}

/// All extensions are loaded; translation catalogs may be read.
#[derive(Debug, Clone, Default)]
pub struct PluginsLoaded;

/// Filter: entry types the plugin manages.
#[derive(Debug, Clone, Default)]
pub struct SupportedEntryTypes {
    /// Type names
    pub types: Vec<String>,
}

impl SupportedEntryTypes {
    /// Start from a default list
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Check membership
    pub fn contains(&self, entry_type: &str) -> bool {
        self.types.iter().any(|t| t == entry_type)
    }
}

/// Filter: locales offered in every selector.
#[derive(Debug, Clone, Default)]
pub struct SupportedLocales {
    /// Catalog being built
    pub catalog: LocaleCatalog,
}

impl SupportedLocales {
    /// Start from a catalog
    pub fn new(catalog: LocaleCatalog) -> Self {
        Self { catalog }
    }
}

/// Where an edit-screen panel is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaBoxContext {
    /// Main column
    Normal,
    /// Sidebar
    Side,
    /// Below the main column
    Advanced,
}

/// An edit-screen panel registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaBox {
    /// Panel id
    pub id: String,
    /// Panel title
    pub title: String,
    /// Entry type whose editor shows the panel
    pub entry_type: String,
    /// Placement
    pub context: MetaBoxContext,
}

/// Edit screens are being assembled; handlers add panels.
#[derive(Debug, Clone, Default)]
pub struct RegisterMetaBoxes {
    /// Registered panels
    pub boxes: Vec<MetaBox>,
}

/// A registered panel is being drawn for an entry.
#[derive(Debug, Clone)]
pub struct RenderMetaBox {
    /// Panel id
    pub box_id: String,
    /// Entry being edited
    pub entry: Entry,
    /// Request in flight
    pub request: RequestContext,
    /// Panel body
    pub html: String,
}

/// An entry was saved from any edit form.
#[derive(Debug, Clone)]
pub struct SaveEntry {
    /// Saved entry
    pub entry: Entry,
    /// Request in flight
    pub request: RequestContext,
}

/// The inline quick-edit row is being drawn, once per custom column.
#[derive(Debug, Clone)]
pub struct QuickEditBox {
    /// Column triggering the panel
    pub column: String,
    /// Type listed on the screen
    pub entry_type: String,
    /// Request in flight
    pub request: RequestContext,
    /// Panel body
    pub html: String,
}

/// The multi-record bulk-edit row is being drawn, once per custom column.
#[derive(Debug, Clone)]
pub struct BulkEditBox {
    /// Column triggering the panel
    pub column: String,
    /// Type listed on the screen
    pub entry_type: String,
    /// Request in flight
    pub request: RequestContext,
    /// Panel body
    pub html: String,
}

/// A script registered for an admin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineScript {
    /// Script handle
    pub handle: String,
    /// Handles that must load first
    pub deps: Vec<String>,
    /// Load in the footer
    pub in_footer: bool,
    /// Script source
    pub source: String,
}

/// Admin assets are being enqueued for a screen.
#[derive(Debug, Clone, Default)]
pub struct EnqueueAdminAssets {
    /// Current screen, if known
    pub screen: Option<Screen>,
    /// Scripts to print
    pub scripts: Vec<InlineScript>,
}

/// A list-table screen is loading, before any output (bulk submissions land here).
#[derive(Debug, Clone)]
pub struct LoadListScreen {
    /// Request in flight
    pub request: RequestContext,
}

/// Column headers of a list table.
#[derive(Debug, Clone, Default)]
pub struct ListColumns {
    /// Type listed
    pub entry_type: String,
    /// `(key, label)` in display order
    pub columns: Vec<(String, String)>,
}

impl ListColumns {
    /// Start from host columns
    pub fn new(entry_type: impl Into<String>, columns: Vec<(String, String)>) -> Self {
        Self {
            entry_type: entry_type.into(),
            columns,
        }
    }

    /// Label of a column
    pub fn label(&self, key: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }
}

/// A custom list-table cell is being drawn.
#[derive(Debug, Clone, Default)]
pub struct RenderListColumn {
    /// Type listed
    pub entry_type: String,
    /// Column key
    pub column: String,
    /// Row entry
    pub entry_id: EntryId,
    /// Cell body
    pub html: String,
}

/// The root element's language attributes are being built.
#[derive(Debug, Clone)]
pub struct LanguageAttributes {
    /// Request in flight
    pub request: RequestContext,
    /// Attribute string, initially the host's
    pub output: String,
}

/// The document head is being printed.
#[derive(Debug, Clone)]
pub struct DocumentHead {
    /// Request in flight
    pub request: RequestContext,
    /// Markup appended by handlers
    pub html: String,
}
