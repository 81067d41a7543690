//! Built-in translations of the plugin's admin labels

use langswitch_admin::msgid;
use langswitch_locale::{MessageCatalog, TextDomain};
use once_cell::sync::Lazy;

static RUSSIAN: Lazy<MessageCatalog> = Lazy::new(|| {
    let mut catalog = MessageCatalog::new();
    catalog.insert(msgid::USE_SITE_DEFAULT, "Язык сайта по умолчанию");
    catalog.insert(msgid::METABOX_TITLE, "Язык страницы (HTML lang)");
    catalog.insert(msgid::METABOX_LABEL, "Локаль для этой записи/страницы:");
    catalog.insert(msgid::LANG, "Язык");
    catalog.insert(msgid::NO_CHANGE, "— Без изменений —");
    catalog
});

/// Text domain with the compiled-in catalogs registered.
pub fn text_domain(name: &str) -> TextDomain {
    TextDomain::new(name).with_builtin("ru", RUSSIAN.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_builtin() {
        let domain = text_domain("html-lang-switcher");
        assert_eq!(domain.translate("Lang"), "Lang");

        assert!(domain.activate("ru_RU"));
        assert_eq!(domain.translate("Lang"), "Язык");
        assert_eq!(domain.translate("— No change —"), "— Без изменений —");
    }

    #[test]
    fn test_other_locales_untranslated() {
        let domain = text_domain("html-lang-switcher");
        assert!(!domain.activate("de_DE"));
        assert_eq!(domain.translate("Lang"), "Lang");
    }
}
