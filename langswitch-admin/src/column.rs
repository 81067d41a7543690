//! List-table column

use crate::{MetadataEditor, registry::msgid};
use langswitch_core::{EntryId, HtmlEncoder};

/// Column key
pub const COLUMN_KEY: &str = "hls_locale";

/// Shown when an entry has no override
pub const EMPTY_CELL: &str = "—";

impl MetadataEditor {
    /// Append the locale column for supported types.
    pub fn add_column(&self, entry_type: &str, columns: &mut Vec<(String, String)>) {
        if !self.registry().supports(entry_type) {
            return;
        }
        let label = self.registry().translate(msgid::LANG);
        match columns.iter_mut().find(|(key, _)| key == COLUMN_KEY) {
            Some((_, existing)) => *existing = label,
            None => columns.push((COLUMN_KEY.to_string(), label)),
        }
    }

    /// Cell markup; the raw value rides in `data-hls` for quick edit.
    pub fn render_cell(&self, column: &str, entry: EntryId) -> Option<String> {
        if column != COLUMN_KEY {
            return None;
        }
        let value = self.stored(entry);
        let shown = if value.is_empty() { EMPTY_CELL } else { value.as_str() };
        Some(format!(
            r#"<span class="hls-locale-data" data-hls="{}">{}</span>"#,
            HtmlEncoder::encode_html_attribute(&value),
            HtmlEncoder::encode_html(shown)
        ))
    }
}
