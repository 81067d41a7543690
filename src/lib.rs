//! # HTML Lang Switcher
//!
//! Per-entry `lang`/`dir` overrides for content-managed sites.
//!
//! An operator picks a locale for an individual post or page from the edit
//! screen, quick edit or bulk edit. When that entry is viewed on its own,
//! the root element's attributes are rewritten to the chosen language and
//! direction, and an alternate-language link is added to the head when the
//! choice differs from the site's language.
//!
//! The plugin owns no storage, users or pages. The host supplies them
//! through the traits in [`langswitch_core`] and drives the plugin by dispatching
//! lifecycle events on a [`HookBus`].
//!
//! ## Crates
//!
//! - [`langswitch_core`]: host seams, hook bus, events, escaping, configuration
//! - [`langswitch_locale`]: locale codes, text direction, locale catalog, message catalogs
//! - [`langswitch_nonce`]: signed, action-scoped form tokens
//! - [`langswitch_admin`]: edit-screen, quick edit, bulk edit and list column surfaces
//! - [`langswitch_output`]: root attributes and hreflang hint
//!
//! ## Quick Start
//!
//! ```rust
//! use langswitch::prelude::*;
//! use langswitch::langswitch_core::events::LanguageAttributes;
//! use langswitch::langswitch_core::testing::{StaticPrincipal, StaticProbe, TestHost};
//!
//! let host = TestHost::new("en_US").with_entry(Entry::new(1, "page"));
//! host.meta.seed(1, "_html_lang_locale", "he-IL");
//!
//! let bus = HookBus::new();
//! Plugin::boot(&bus, host.services(), &StaticProbe::empty(), LangSwitchConfig::default(), false)
//!     .unwrap();
//!
//! let request = RequestContext::new(StaticPrincipal::visitor().shared())
//!     .with_view(View::Singular(Some(EntryId(1))));
//! let attrs = bus.apply(LanguageAttributes {
//!     request,
//!     output: r#"lang="en-US""#.to_string(),
//! });
//! assert_eq!(attrs.output, r#"lang="he-IL" dir="rtl""#);
//! ```

pub mod error;
pub mod features;
pub mod logging;
pub mod messages;
pub mod plugin;

pub use error::{BootError, Result};
pub use features::{Competitor, Features};
pub use plugin::Plugin;

#[cfg(feature = "tracing-subscriber")]
pub use logging::{init_tracing, init_tracing_with_level};

// Re-export member crates
pub use langswitch_admin;
pub use langswitch_core;
pub use langswitch_locale;
pub use langswitch_nonce;
pub use langswitch_output;

pub use langswitch_core::HookBus;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{BootError, Competitor, Features, Plugin};
    pub use langswitch_admin::{BulkOutcome, MetadataEditor, RuleOutcome, SaveOutcome, SkipReason};
    pub use langswitch_core::prelude::*;
    pub use langswitch_locale::{LocaleCatalog, LocaleCode, TextDirection, TextDomain, is_rtl};
    pub use langswitch_output::OutputFilter;
}
