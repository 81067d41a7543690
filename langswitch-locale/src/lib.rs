//! Locale handling for the HTML lang switcher
//!
//! Provides the pieces of the plugin that deal with language tags:
//!
//! - **Locale Codes**: the validated override value stored per entry
//! - **Text Direction**: RTL/LTR classification from the primary subtag
//! - **Locale Catalog**: the ordered list of selectable locales
//! - **Message Catalogs**: translations for the plugin's own admin labels
//!
//! # Quick Start
//!
//! ```
//! use langswitch_locale::{LocaleCode, TextDirection, is_rtl};
//!
//! let code = LocaleCode::parse("es-AR").unwrap();
//! assert_eq!(code.language(), "es");
//! assert_eq!(code.direction(), TextDirection::Ltr);
//!
//! assert!(is_rtl("ar"));
//! assert!(LocaleCode::parse("en_US").is_err());
//! ```
//!
//! # Catalog
//!
//! ```
//! use langswitch_locale::LocaleCatalog;
//!
//! let mut catalog = LocaleCatalog::base("Use site default language");
//! catalog.insert("fa-IR", "فارسی");
//! catalog.remove("ru");
//!
//! assert_eq!(catalog.get(""), Some("Use site default language"));
//! assert!(catalog.contains("fa-IR"));
//! ```

mod catalog;
mod direction;
mod error;
mod locale;
mod messages;

pub use catalog::{BASE_LOCALES, CatalogEntry, LocaleCatalog};
pub use direction::{RTL_SUBTAGS, TextDirection, is_rtl, primary_subtag};
pub use error::LocaleError;
pub use locale::{LOCALE_PATTERN, LocaleCode};
pub use messages::{MessageCatalog, TextDomain};

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, LocaleError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        LocaleCatalog, LocaleCode, LocaleError, MessageCatalog, Result, TextDirection, TextDomain,
        is_rtl,
    };
}
