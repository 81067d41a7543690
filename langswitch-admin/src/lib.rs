//! Admin surfaces for the HTML lang switcher
//!
//! The Metadata Editor renders the locale control on the three edit
//! surfaces the host offers and persists what they submit:
//!
//! | surface | select | token field | action |
//! |---|---|---|---|
//! | edit screen panel | `hls_locale` | `hls_nonce` | `hls_save_meta` |
//! | quick edit | `hls_locale` | `hls_inline_nonce` | `hls_inline_save` |
//! | bulk edit | `hls_locale_bulk` | `hls_bulk_nonce` | `hls_bulk_save` |
//!
//! A list-table column shows each entry's override and carries the raw value
//! for the quick-edit sync script.
//!
//! ## Quick Start
//!
//! ```rust
//! use langswitch_admin::{MetadataEditor, Registry, SaveOutcome, RuleOutcome};
//! use langswitch_core::testing::{StaticPrincipal, TestHost};
//! use langswitch_core::{Entry, FormData, HookBus, RequestContext};
//! use langswitch_locale::TextDomain;
//! use langswitch_nonce::NonceGuard;
//! use std::sync::Arc;
//!
//! let host = TestHost::new("en_US").with_entry(Entry::new(1, "post"));
//! let registry = Registry::new(
//!     HookBus::new(),
//!     vec!["post".into(), "page".into()],
//!     Arc::new(TextDomain::new("html-lang-switcher")),
//! );
//! let nonces = NonceGuard::default();
//! let editor = MetadataEditor::new(host.services(), registry, nonces.clone(), "_html_lang_locale");
//!
//! let token = nonces.issue("hls_save_meta", 1).unwrap();
//! let request = RequestContext::new(StaticPrincipal::editor(1).shared())
//!     .with_form(FormData::new().with("hls_nonce", token).with("hls_locale", "es-AR"));
//!
//! let outcome = editor.save_entry(&Entry::new(1, "post"), &request);
//! assert_eq!(outcome, SaveOutcome::Applied(RuleOutcome::Stored("es-AR".into())));
//! ```

pub mod column;
pub mod editor;
pub mod error;
pub mod outcome;
pub mod registry;
pub mod script;
pub mod select;
pub mod tokens;

pub use column::{COLUMN_KEY, EMPTY_CELL};
pub use editor::{
    BULK_IDS_FIELD, BULK_LOCALE_FIELD, LOCALE_FIELD, METABOX_ID, MetadataEditor, NO_CHANGE,
};
pub use error::{AdminError, AdminResult};
pub use outcome::{BulkEntry, BulkOutcome, RuleOutcome, SaveOutcome, SkipReason};
pub use registry::{Registry, msgid};
pub use script::{QUICK_EDIT_SYNC_JS, SCRIPT_HANDLE, quick_edit_script};
pub use select::{Choice, SelectField};
pub use tokens::{BULK_SAVE, INLINE_SAVE, SAVE_META};
