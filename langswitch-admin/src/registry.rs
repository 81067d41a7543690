//! Filtered views of supported entry types and locales

use langswitch_core::HookBus;
use langswitch_core::events::{SupportedEntryTypes, SupportedLocales};
use langswitch_locale::{LocaleCatalog, TextDomain};
use std::sync::Arc;

/// Source msgids of the plugin's admin labels.
pub mod msgid {
    /// Empty catalog entry
    pub const USE_SITE_DEFAULT: &str = "Use site default language";
    /// Edit-screen panel title
    pub const METABOX_TITLE: &str = "Page language (HTML lang)";
    /// Edit-screen field label
    pub const METABOX_LABEL: &str = "Locale for this post/page:";
    /// Column header and inline field label
    pub const LANG: &str = "Lang";
    /// Bulk sentinel label
    pub const NO_CHANGE: &str = "— No change —";
}

/// Resolves the extensible lists through the hook bus on every call.
#[derive(Clone)]
pub struct Registry {
    bus: HookBus,
    default_types: Vec<String>,
    text: Arc<TextDomain>,
}

impl Registry {
    /// Create a registry
    pub fn new(bus: HookBus, default_types: Vec<String>, text: Arc<TextDomain>) -> Self {
        Self {
            bus,
            default_types,
            text,
        }
    }

    /// Entry types after the supported-types filter
    pub fn supported_types(&self) -> SupportedEntryTypes {
        self.bus
            .apply(SupportedEntryTypes::new(self.default_types.iter().cloned()))
    }

    /// Whether an entry type is managed
    pub fn supports(&self, entry_type: &str) -> bool {
        self.supported_types().contains(entry_type)
    }

    /// Locale catalog after the supported-locales filter
    pub fn supported_locales(&self) -> LocaleCatalog {
        let base = LocaleCatalog::base(self.translate(msgid::USE_SITE_DEFAULT));
        self.bus.apply(SupportedLocales::new(base)).catalog
    }

    /// Translate an admin label
    pub fn translate(&self, msgid: &str) -> String {
        self.text.translate(msgid)
    }

    /// Hook bus in use
    pub fn bus(&self) -> &HookBus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langswitch_locale::MessageCatalog;

    fn registry(bus: &HookBus) -> Registry {
        Registry::new(
            bus.clone(),
            vec!["post".into(), "page".into()],
            Arc::new(TextDomain::new("html-lang-switcher")),
        )
    }

    #[test]
    fn test_default_types() {
        let bus = HookBus::new();
        let registry = registry(&bus);
        assert!(registry.supports("post"));
        assert!(registry.supports("page"));
        assert!(!registry.supports("product"));
    }

    #[test]
    fn test_types_filter() {
        let bus = HookBus::new();
        bus.on(|hook: &mut SupportedEntryTypes| {
            hook.types.retain(|t| t != "post");
            hook.types.push("product".into());
        });
        let registry = registry(&bus);
        assert!(!registry.supports("post"));
        assert!(registry.supports("product"));
    }

    #[test]
    fn test_base_locales() {
        let registry = registry(&HookBus::new());
        let catalog = registry.supported_locales();
        assert_eq!(
            catalog.codes(),
            vec!["", "en", "ru", "es-ES", "es-AR", "en-IN", "it-IT", "de-DE"]
        );
        assert_eq!(catalog.get(""), Some("Use site default language"));
    }

    #[test]
    fn test_locales_filter_and_translation() {
        let bus = HookBus::new();
        bus.on(|hook: &mut SupportedLocales| {
            hook.catalog.insert("ar", "العربية");
            hook.catalog.remove("it-IT");
        });

        let ru = MessageCatalog::from_json(r#"{"Use site default language": "Язык сайта по умолчанию"}"#)
            .unwrap();
        let text = TextDomain::new("html-lang-switcher").with_builtin("ru", ru);
        text.activate("ru_RU");
        let registry = Registry::new(bus, vec!["post".into()], Arc::new(text));

        let catalog = registry.supported_locales();
        assert!(catalog.contains("ar"));
        assert!(!catalog.contains("it-IT"));
        assert_eq!(catalog.get(""), Some("Язык сайта по умолчанию"));
    }
}
