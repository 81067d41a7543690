//! Locale selector markup

use langswitch_core::HtmlEncoder;
use langswitch_locale::LocaleCatalog;
use serde::{Deserialize, Serialize};

/// Option of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Value submitted
    pub value: String,
    /// Display label
    pub label: String,
}

impl Choice {
    /// Create a new choice
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A `<select>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectField {
    /// Form field name
    pub name: String,
    /// CSS class
    pub class: String,
    /// Options in display order
    pub choices: Vec<Choice>,
    /// Value marked selected, if any
    pub selected: Option<String>,
}

impl SelectField {
    /// Selector over a locale catalog
    pub fn locales(
        name: impl Into<String>,
        class: impl Into<String>,
        catalog: &LocaleCatalog,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            choices: catalog
                .iter()
                .map(|entry| Choice::new(entry.code.clone(), entry.label.clone()))
                .collect(),
            selected: None,
        }
    }

    /// Put a choice first, replacing any choice with the same value
    pub fn with_leading(mut self, choice: Choice) -> Self {
        self.choices.retain(|c| c.value != choice.value);
        self.choices.insert(0, choice);
        self
    }

    /// Mark a value selected
    pub fn with_selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Render to markup
    pub fn render(&self) -> String {
        let mut html = format!(
            r#"<select name="{}" class="{}">"#,
            HtmlEncoder::encode_html_attribute(&self.name),
            HtmlEncoder::encode_html_attribute(&self.class)
        );
        for choice in &self.choices {
            let selected = if self.selected.as_deref() == Some(choice.value.as_str()) {
                " selected='selected'"
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value='{}'{}>{}</option>",
                HtmlEncoder::encode_html_attribute(&choice.value),
                selected,
                HtmlEncoder::encode_html(&choice.label)
            ));
        }
        html.push_str("</select>");
        html
    }
}
