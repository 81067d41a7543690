//! Request-scoped context handed to handlers

use crate::{EntryId, Principal, Result};
use std::fmt;
use std::sync::Arc;

/// Submitted form fields in submission order.
///
/// Repeated names are kept; `name[]` array fields are read with [`FormData::get_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let fields = serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)?;
        Ok(Self { fields })
    }

    /// Build from pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Append a field
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Last value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name` or `name[]`, in order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        let array_name = format!("{name}[]");
        self.fields
            .iter()
            .filter(|(k, _)| k == name || *k == array_name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Check if a field was submitted
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == name)
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// What the current request renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Back-office screen
    Admin,
    /// Single-entry front-end view; the queried object, if it is an entry
    Singular(Option<EntryId>),
    /// Archives, search, home and the rest
    #[default]
    Other,
}

impl View {
    /// Single-entry view
    pub fn is_singular(&self) -> bool {
        matches!(self, View::Singular(_))
    }

    /// Entry targeted by a singular view
    pub fn queried_entry(&self) -> Option<EntryId> {
        match self {
            View::Singular(entry) => *entry,
            _ => None,
        }
    }
}

/// The back-office screen being prepared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Screen base (e.g. `edit` for list tables, `post` for the editor)
    pub base: String,
    /// Entry type the screen is about
    pub entry_type: Option<String>,
}

impl Screen {
    /// Create a screen
    pub fn new(base: impl Into<String>, entry_type: Option<&str>) -> Self {
        Self {
            base: base.into(),
            entry_type: entry_type.map(str::to_string),
        }
    }

    /// List-table screen for a type
    pub fn list(entry_type: &str) -> Self {
        Self::new("edit", Some(entry_type))
    }

    /// Whether this is a list-table screen
    pub fn is_list(&self) -> bool {
        self.base == "edit"
    }
}

/// Everything a handler knows about the request in flight.
#[derive(Clone)]
pub struct RequestContext {
    /// Acting user
    pub principal: Arc<dyn Principal>,
    /// Submitted form fields
    pub form: FormData,
    /// The host is running a background autosave
    pub doing_autosave: bool,
    /// What is being rendered
    pub view: View,
}

impl RequestContext {
    /// Create a context for a principal
    pub fn new(principal: Arc<dyn Principal>) -> Self {
        Self {
            principal,
            form: FormData::new(),
            doing_autosave: false,
            view: View::default(),
        }
    }

    /// Set submitted form
    pub fn with_form(mut self, form: FormData) -> Self {
        self.form = form;
        self
    }

    /// Set the view
    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    /// Flag a background autosave
    pub fn autosave(mut self, doing_autosave: bool) -> Self {
        self.doing_autosave = doing_autosave;
        self
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("principal", &self.principal.id())
            .field("form", &self.form)
            .field("doing_autosave", &self.doing_autosave)
            .field("view", &self.view)
            .finish()
    }
}
