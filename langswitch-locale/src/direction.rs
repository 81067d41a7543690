//! Text direction classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary language subtags written right-to-left.
pub const RTL_SUBTAGS: [&str; 4] = ["ar", "he", "fa", "ur"];

/// Writing direction of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

impl TextDirection {
    /// Classify any locale-like string.
    pub fn of(locale: &str) -> Self {
        if is_rtl(locale) { Self::Rtl } else { Self::Ltr }
    }

    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything before the first hyphen.
pub fn primary_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or_default()
}

/// Whether a locale's primary subtag is written right-to-left.
///
/// Total over any input; case-insensitive on the subtag.
///
/// ```
/// use langswitch_locale::is_rtl;
///
/// assert!(is_rtl("ar"));
/// assert!(is_rtl("FA-IR"));
/// assert!(!is_rtl("en-US"));
/// assert!(!is_rtl(""));
/// ```
pub fn is_rtl(locale: &str) -> bool {
    let subtag = primary_subtag(locale).to_lowercase();
    RTL_SUBTAGS.contains(&subtag.as_str())
}
