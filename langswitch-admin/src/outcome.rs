//! What each admin pathway did with a submission.
//!
//! Nothing here reaches the operator; the values exist for logs and tests.

use langswitch_core::EntryId;
use serde::Serialize;

/// Why a pathway declined to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Entry type not managed
    UnsupportedType,
    /// Host is running a background autosave
    Autosave,
    /// Entry is an autosave or revision snapshot
    Snapshot,
    /// No valid token for the pathway
    InvalidToken,
    /// Principal lacks the capability
    Forbidden,
    /// Bulk selector left at "no change"
    NoChange,
    /// Entry does not exist
    NotFound,
}

/// Result of applying the store rule to one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    /// Empty value; override removed
    Deleted,
    /// Valid value stored verbatim
    Stored(String),
    /// Value failed validation; nothing changed
    IgnoredInvalid,
    /// Metadata store rejected the write
    WriteFailed(String),
}

/// Result of the save handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// Declined before touching storage
    Skipped(SkipReason),
    /// Bulk submission; left to the bulk pathway
    DeferredToBulk,
    /// Rule applied
    Applied(RuleOutcome),
}

impl SaveOutcome {
    /// Whether storage was changed
    pub fn changed(&self) -> bool {
        matches!(
            self,
            SaveOutcome::Applied(RuleOutcome::Deleted | RuleOutcome::Stored(_))
        )
    }
}

/// Per-entry result of a bulk submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkEntry {
    /// Targeted entry
    pub id: EntryId,
    /// Skip reason, or the rule outcome
    pub outcome: Result<RuleOutcome, SkipReason>,
}

/// Result of the bulk handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkOutcome {
    /// Whole submission declined
    Skipped(SkipReason),
    /// Entries visited in submission order
    Applied(Vec<BulkEntry>),
}

impl BulkOutcome {
    /// Entries whose storage changed
    pub fn changed(&self) -> Vec<EntryId> {
        match self {
            BulkOutcome::Skipped(_) => Vec::new(),
            BulkOutcome::Applied(entries) => entries
                .iter()
                .filter(|e| matches!(e.outcome, Ok(RuleOutcome::Deleted | RuleOutcome::Stored(_))))
                .map(|e| e.id)
                .collect(),
        }
    }

    /// Entries skipped for a reason
    pub fn skipped(&self, reason: SkipReason) -> Vec<EntryId> {
        match self {
            BulkOutcome::Skipped(_) => Vec::new(),
            BulkOutcome::Applied(entries) => entries
                .iter()
                .filter(|e| e.outcome == Err(reason))
                .map(|e| e.id)
                .collect(),
        }
    }
}
