//! Output encoding for emitted markup

/// URL schemes allowed in emitted `href` values.
const ALLOWED_SCHEMES: [&str; 11] = [
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "gopher", "nntp", "feed", "telnet",
];

/// HTML encoding utilities
pub struct HtmlEncoder;

impl HtmlEncoder {
    /// Encode text placed between tags
    pub fn encode_html(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                '&' => out.push_str("&amp;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Encode a value placed inside a quoted attribute
    pub fn encode_html_attribute(text: &str) -> String {
        // Same set as text content; attributes here are always double-quoted.
        Self::encode_html(text)
    }

    /// Clean and encode a URL for an `href` attribute.
    ///
    /// Spaces become `%20`, characters outside the URL alphabet are dropped,
    /// and anything with a scheme outside the allow-list becomes empty.
    ///
    /// ```
    /// use langswitch_core::HtmlEncoder;
    ///
    /// assert_eq!(
    ///     HtmlEncoder::encode_url("https://example.com/?a=1&b=2"),
    ///     "https://example.com/?a=1&amp;b=2"
    /// );
    /// assert_eq!(HtmlEncoder::encode_url("javascript:alert(1)"), "");
    /// ```
    pub fn encode_url(url: &str) -> String {
        let url = url.trim();
        if url.is_empty() {
            return String::new();
        }

        let cleaned: String = url
            .replace(' ', "%20")
            .chars()
            .filter(|c| !c.is_ascii() || c.is_ascii_alphanumeric() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(*c))
            .collect();

        if let Some((scheme, _)) = cleaned.split_once(':') {
            let is_scheme = !scheme.contains(['/', '?', '#']);
            if is_scheme && !ALLOWED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
                return String::new();
            }
        }

        Self::encode_html_attribute(&cleaned)
    }
}
