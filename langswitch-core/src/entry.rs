//! Content entries as seen by the plugin

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host identifier of a content entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    /// Parse a submitted identifier the way form handlers read numeric ids:
    /// leading whitespace and digits count, the rest is ignored. Zero and
    /// non-numeric input identify nothing.
    ///
    /// ```
    /// use langswitch_core::EntryId;
    ///
    /// assert_eq!(EntryId::parse_lenient("42"), Some(EntryId(42)));
    /// assert_eq!(EntryId::parse_lenient(" 7abc"), Some(EntryId(7)));
    /// assert_eq!(EntryId::parse_lenient("abc"), None);
    /// assert_eq!(EntryId::parse_lenient("0"), None);
    /// ```
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let digits: String = value
            .trim_start()
            .trim_start_matches('+')
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        match digits.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Whether an entry is live content or a host-managed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular content
    #[default]
    Standard,
    /// Periodic draft snapshot
    Autosave,
    /// Stored revision
    Revision,
}

/// A content entry (post, page, or any host-defined type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier
    pub id: EntryId,
    /// Host type name (e.g. `post`, `page`)
    pub entry_type: String,
    /// Snapshot kind
    #[serde(default)]
    pub kind: EntryKind,
}

impl Entry {
    /// Create a standard entry
    pub fn new(id: impl Into<EntryId>, entry_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entry_type: entry_type.into(),
            kind: EntryKind::Standard,
        }
    }

    /// Mark as a specific kind
    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Autosaves and revisions never carry their own override.
    pub fn is_snapshot(&self) -> bool {
        matches!(self.kind, EntryKind::Autosave | EntryKind::Revision)
    }
}
