//! Core building blocks for the HTML lang switcher
//!
//! Everything the plugin needs from its host is expressed here as a trait,
//! so the admin and output surfaces never talk to a concrete CMS:
//!
//! - **Host seams**: [`MetaStore`], [`ContentRepository`], [`Principal`],
//!   [`SiteSettings`], [`RuntimeProbe`]
//! - **Hook bus**: typed registration of handlers for host lifecycle events
//! - **Events**: one struct per lifecycle point the plugin listens to
//! - **Escaping**: attribute, text and URL encoding for emitted markup
//! - **Configuration**: [`LangSwitchConfig`] from defaults, TOML or environment
//!
//! # Hook Bus
//!
//! ```
//! use langswitch_core::{HookBus, events::SupportedEntryTypes};
//!
//! let bus = HookBus::new();
//! bus.on(|hook: &mut SupportedEntryTypes| hook.types.push("product".to_string()));
//!
//! let types = bus.apply(SupportedEntryTypes::new(["post", "page"]));
//! assert_eq!(types.types, vec!["post", "page", "product"]);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod escape;
pub mod events;
pub mod hooks;
pub mod host;
pub mod request;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ENV_PREFIX, LangSwitchConfig, MAX_NONCE_TTL_SECS};
pub use entry::{Entry, EntryId, EntryKind};
pub use error::{ConfigError, HostError};
pub use escape::HtmlEncoder;
pub use hooks::{DEFAULT_PRIORITY, Hook, HookBus, HookBusConfig};
pub use host::{ContentRepository, HostServices, MetaStore, Principal, RuntimeProbe, SiteSettings};
pub use request::{FormData, RequestContext, Screen, View};

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ContentRepository, Entry, EntryId, EntryKind, FormData, Hook, HookBus, HostError,
        HostServices, HtmlEncoder, LangSwitchConfig, MetaStore, Principal, RequestContext,
        RuntimeProbe, Screen, SiteSettings, View,
    };
}
