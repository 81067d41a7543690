//! Metadata Editor
//!
//! Renders the locale control on every edit surface and persists what comes
//! back. All guards fail closed and silently: a declined request leaves
//! storage untouched and reports why through the returned outcome.

use crate::{
    AdminResult, Registry,
    outcome::{BulkEntry, BulkOutcome, RuleOutcome, SaveOutcome, SkipReason},
    registry::msgid,
    select::{Choice, SelectField},
    tokens::{self, BULK_SAVE, INLINE_SAVE, SAVE_META},
};
use langswitch_core::{
    Entry, EntryId, HostServices, HtmlEncoder, RequestContext,
    events::{MetaBox, MetaBoxContext},
};
use langswitch_locale::LocaleCode;
use langswitch_nonce::NonceGuard;
use tracing::{debug, info, warn};

/// Edit-screen panel id
pub const METABOX_ID: &str = "hls_lang_box";

/// Field carrying the locale on the edit screen and in quick edit
pub const LOCALE_FIELD: &str = "hls_locale";

/// Field carrying the locale in bulk edit
pub const BULK_LOCALE_FIELD: &str = "hls_locale_bulk";

/// Bulk choice meaning "leave every entry as it is"
pub const NO_CHANGE: &str = "__nochange__";

/// Field carrying the targeted ids of a bulk submission
pub const BULK_IDS_FIELD: &str = "post";

/// Renders and persists the per-entry locale override.
#[derive(Clone)]
pub struct MetadataEditor {
    services: HostServices,
    registry: Registry,
    nonces: NonceGuard,
    meta_key: String,
}

impl MetadataEditor {
    /// Create an editor
    pub fn new(
        services: HostServices,
        registry: Registry,
        nonces: NonceGuard,
        meta_key: impl Into<String>,
    ) -> Self {
        Self {
            services,
            registry,
            nonces,
            meta_key: meta_key.into(),
        }
    }

    /// Metadata key in use
    pub fn meta_key(&self) -> &str {
        &self.meta_key
    }

    /// Registry in use
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Stored override, or empty
    pub fn stored(&self, entry: EntryId) -> String {
        self.services
            .meta
            .get(entry, &self.meta_key)
            .unwrap_or_default()
    }

    /// One side panel per supported type.
    pub fn meta_boxes(&self) -> Vec<MetaBox> {
        let title = self.registry.translate(msgid::METABOX_TITLE);
        self.registry
            .supported_types()
            .types
            .into_iter()
            .map(|entry_type| MetaBox {
                id: METABOX_ID.to_string(),
                title: title.clone(),
                entry_type,
                context: MetaBoxContext::Side,
            })
            .collect()
    }

    /// Edit-screen control with the stored value pre-selected.
    pub fn render_metabox(&self, entry: &Entry, request: &RequestContext) -> AdminResult<String> {
        let current = self.stored(entry.id);
        let catalog = self.registry.supported_locales();

        let mut html = self.nonces.hidden_field(SAVE_META, request.principal.id())?;
        html.push_str(&format!(
            "<p><label>{}</label></p>",
            HtmlEncoder::encode_html(&self.registry.translate(msgid::METABOX_LABEL))
        ));
        html.push_str(
            &SelectField::locales(LOCALE_FIELD, "widefat", &catalog)
                .with_selected(current)
                .render(),
        );
        Ok(html)
    }

    /// Quick-edit control; `None` for unsupported types.
    pub fn render_quick_edit(
        &self,
        entry_type: &str,
        request: &RequestContext,
    ) -> AdminResult<Option<String>> {
        if !self.registry.supports(entry_type) {
            return Ok(None);
        }
        let select = SelectField::locales(
            LOCALE_FIELD,
            "hls-locale-select",
            &self.registry.supported_locales(),
        );
        let token = self.nonces.hidden_field(INLINE_SAVE, request.principal.id())?;
        Ok(Some(self.inline_panel(&token, &select)))
    }

    /// Bulk-edit control headed by the "no change" choice; `None` for unsupported types.
    pub fn render_bulk_edit(
        &self,
        entry_type: &str,
        request: &RequestContext,
    ) -> AdminResult<Option<String>> {
        if !self.registry.supports(entry_type) {
            return Ok(None);
        }
        let select = SelectField::locales(
            BULK_LOCALE_FIELD,
            "hls-locale-bulk",
            &self.registry.supported_locales(),
        )
        .with_leading(Choice::new(
            NO_CHANGE,
            self.registry.translate(msgid::NO_CHANGE),
        ));
        let token = self.nonces.hidden_field(BULK_SAVE, request.principal.id())?;
        Ok(Some(self.inline_panel(&token, &select)))
    }

    fn inline_panel(&self, token: &str, select: &SelectField) -> String {
        format!(
            r#"<fieldset class="inline-edit-col-right"><div class="inline-edit-col">{token}<label><span class="title">{label}</span>{select}</label></div></fieldset>"#,
            label = HtmlEncoder::encode_html(&self.registry.translate(msgid::LANG)),
            select = select.render()
        )
    }

    /// Entry-save handler for the edit screen and quick edit.
    pub fn save_entry(&self, entry: &Entry, request: &RequestContext) -> SaveOutcome {
        let outcome = self.check_save(entry, request);
        match &outcome {
            SaveOutcome::Skipped(reason) => {
                debug!(entry = %entry.id, ?reason, "Skipped locale save");
            }
            SaveOutcome::DeferredToBulk => {
                debug!(entry = %entry.id, "Locale save left to bulk handler");
            }
            SaveOutcome::Applied(_) => {}
        }
        outcome
    }

    fn check_save(&self, entry: &Entry, request: &RequestContext) -> SaveOutcome {
        if !self.registry.supports(&entry.entry_type) {
            return SaveOutcome::Skipped(SkipReason::UnsupportedType);
        }
        if request.doing_autosave {
            return SaveOutcome::Skipped(SkipReason::Autosave);
        }
        if entry.is_snapshot() {
            return SaveOutcome::Skipped(SkipReason::Snapshot);
        }
        if !tokens::verify_single_or_inline(&self.nonces, request) {
            if tokens::is_bulk_request(request) {
                return SaveOutcome::DeferredToBulk;
            }
            return SaveOutcome::Skipped(SkipReason::InvalidToken);
        }
        if !request.principal.can_edit_entry(entry.id) {
            return SaveOutcome::Skipped(SkipReason::Forbidden);
        }

        let submitted = request.form.get(LOCALE_FIELD).unwrap_or_default();
        SaveOutcome::Applied(self.apply(entry.id, submitted))
    }

    /// Bulk-edit handler, run when a list screen loads.
    pub fn bulk_apply(&self, request: &RequestContext) -> BulkOutcome {
        if !tokens::verify_bulk(&self.nonces, request) {
            return BulkOutcome::Skipped(SkipReason::InvalidToken);
        }
        if !request.principal.can_edit_entries() {
            debug!(principal = request.principal.id(), "Bulk locale edit forbidden");
            return BulkOutcome::Skipped(SkipReason::Forbidden);
        }

        let locale = request
            .form
            .get(BULK_LOCALE_FIELD)
            .map(str::trim)
            .unwrap_or(NO_CHANGE);
        if locale == NO_CHANGE {
            return BulkOutcome::Skipped(SkipReason::NoChange);
        }
        if !locale.is_empty() && !LocaleCode::is_valid(locale) {
            // Each entry reports `IgnoredInvalid` below; storage is left as it is.
            debug!(locale, "Ignored invalid bulk locale");
        }

        let entries: Vec<BulkEntry> = request
            .form
            .get_all(BULK_IDS_FIELD)
            .into_iter()
            .filter_map(EntryId::parse_lenient)
            .map(|id| BulkEntry {
                id,
                outcome: self.bulk_entry(id, locale, request),
            })
            .collect();

        info!(entries = entries.len(), locale, "Applied bulk locale edit");
        BulkOutcome::Applied(entries)
    }

    fn bulk_entry(
        &self,
        id: EntryId,
        locale: &str,
        request: &RequestContext,
    ) -> Result<RuleOutcome, SkipReason> {
        let entry = self
            .services
            .content
            .entry(id)
            .ok_or(SkipReason::NotFound)?;
        if !self.registry.supports(&entry.entry_type) {
            return Err(SkipReason::UnsupportedType);
        }
        if !request.principal.can_edit_entry(id) {
            return Err(SkipReason::Forbidden);
        }
        Ok(self.apply(id, locale))
    }

    /// Store rule on a submitted value: empty deletes, invalid is ignored,
    /// valid is stored verbatim.
    pub fn apply(&self, entry: EntryId, submitted: &str) -> RuleOutcome {
        let value = submitted.trim();

        if value.is_empty() {
            return match self.services.meta.delete(entry, &self.meta_key) {
                Ok(()) => {
                    info!(%entry, "Removed locale override");
                    RuleOutcome::Deleted
                }
                Err(err) => {
                    warn!(%entry, error = %err, "Failed to remove locale override");
                    RuleOutcome::WriteFailed(err.to_string())
                }
            };
        }

        let Ok(locale) = LocaleCode::parse(value) else {
            debug!(%entry, value, "Ignored invalid locale");
            return RuleOutcome::IgnoredInvalid;
        };

        match self.services.meta.update(entry, &self.meta_key, locale.as_str()) {
            Ok(()) => {
                info!(%entry, %locale, "Stored locale override");
                RuleOutcome::Stored(locale.into_inner())
            }
            Err(err) => {
                warn!(%entry, error = %err, "Failed to store locale override");
                RuleOutcome::WriteFailed(err.to_string())
            }
        }
    }
}
