//! Output Filter
//!
//! Reads the override of the entry a singular view displays and rewrites
//! the root element's language attributes, then announces the entry's
//! language with an alternate link when it differs from the site's.
//!
//! ```rust
//! use langswitch_core::testing::{StaticPrincipal, TestHost};
//! use langswitch_core::{Entry, EntryId, RequestContext, View};
//! use langswitch_output::OutputFilter;
//!
//! let host = TestHost::new("en").with_entry(Entry::new(7, "page"));
//! host.meta.seed(7, "_html_lang_locale", "es-AR");
//! let filter = OutputFilter::new(host.services(), "_html_lang_locale");
//!
//! let request = RequestContext::new(StaticPrincipal::visitor().shared())
//!     .with_view(View::Singular(Some(EntryId(7))));
//!
//! assert_eq!(
//!     filter.language_attributes(&request, r#"lang="en""#),
//!     r#"lang="es-AR" dir="ltr""#
//! );
//! assert_eq!(
//!     filter.hreflang_link(&request).unwrap(),
//!     "<link rel=\"alternate\" hreflang=\"es-AR\" href=\"https://example.com/?p=7\" />\n"
//! );
//! ```

use langswitch_core::{EntryId, HostServices, HtmlEncoder, RequestContext};
use langswitch_locale::TextDirection;
use tracing::trace;

/// Rewrites root attributes and emits the alternate-language hint.
#[derive(Clone)]
pub struct OutputFilter {
    services: HostServices,
    meta_key: String,
}

impl OutputFilter {
    /// Create a filter
    pub fn new(services: HostServices, meta_key: impl Into<String>) -> Self {
        Self {
            services,
            meta_key: meta_key.into(),
        }
    }

    /// Trimmed override of the displayed entry, if any.
    fn displayed_override(&self, request: &RequestContext) -> Option<(EntryId, String)> {
        let entry = request.view.queried_entry()?;
        let locale = self.services.meta.get(entry, &self.meta_key)?;
        let locale = locale.trim();
        (!locale.is_empty()).then(|| (entry, locale.to_string()))
    }

    /// `lang="<code>" dir="<ltr|rtl>"` for an overridden singular view,
    /// otherwise `current` unchanged.
    pub fn language_attributes(&self, request: &RequestContext, current: &str) -> String {
        let Some((entry, locale)) = self.displayed_override(request) else {
            return current.to_string();
        };
        let dir = TextDirection::of(&locale);
        trace!(%entry, %locale, %dir, "Overriding language attributes");
        format!(
            r#"lang="{}" dir="{}""#,
            HtmlEncoder::encode_html_attribute(&locale),
            HtmlEncoder::encode_html_attribute(dir.as_str())
        )
    }

    /// Alternate link when the override differs from the site locale.
    pub fn hreflang_link(&self, request: &RequestContext) -> Option<String> {
        let (entry, locale) = self.displayed_override(request)?;
        if locale == self.services.site.locale() {
            return None;
        }
        let href = self.services.content.permalink(entry).unwrap_or_default();
        Some(format!(
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
            HtmlEncoder::encode_html_attribute(&locale),
            HtmlEncoder::encode_url(&href)
        ))
    }
}
