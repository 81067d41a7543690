//! Plugin boot
//!
//! Detects competitors once, then attaches handlers to the host's hook bus.
//! With a competitor present only the translation loader is attached.

use crate::{BootError, Features, messages};
use langswitch_admin::{COLUMN_KEY, METABOX_ID, MetadataEditor, Registry, quick_edit_script};
use langswitch_core::events::{
    BulkEditBox, DocumentHead, EnqueueAdminAssets, LanguageAttributes, ListColumns,
    LoadListScreen, PluginsLoaded, QuickEditBox, RegisterMetaBoxes, RenderListColumn,
    RenderMetaBox, SaveEntry,
};
use langswitch_core::{HookBus, HostServices, LangSwitchConfig, RuntimeProbe, SiteSettings};
use langswitch_locale::TextDomain;
use langswitch_nonce::{NonceConfig, NonceGuard};
use langswitch_output::OutputFilter;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Priority of the language-attributes handler; runs after host defaults.
pub const ATTRIBUTES_PRIORITY: i32 = 20;

/// A booted plugin.
pub struct Plugin {
    config: Arc<LangSwitchConfig>,
    features: Features,
    text: Arc<TextDomain>,
}

impl Plugin {
    /// Validate configuration, detect competitors and attach handlers.
    pub fn boot(
        bus: &HookBus,
        host: HostServices,
        probe: &dyn RuntimeProbe,
        config: LangSwitchConfig,
        admin: bool,
    ) -> crate::Result<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let features = Features::detect(probe, admin);
        let text = Arc::new(messages::text_domain(&config.text_domain));

        register_translation_loader(bus, &config, text.clone(), host.site.clone());

        if let Some(competitor) = features.competitor {
            info!(%competitor, "Multilingual plugin active, lang switcher disabled");
            return Ok(Self {
                config,
                features,
                text,
            });
        }

        if features.admin_enabled() {
            let registry = Registry::new(
                bus.clone(),
                config.default_entry_types.clone(),
                text.clone(),
            );
            let editor = MetadataEditor::new(
                host.clone(),
                registry,
                NonceGuard::new(nonce_config(&config)?),
                config.meta_key.clone(),
            );
            register_editor(bus, editor);
        }

        register_output(bus, OutputFilter::new(host, config.meta_key.clone()));

        info!(
            admin = features.admin,
            handlers = bus.total_handlers(),
            "Lang switcher booted"
        );
        Ok(Self {
            config,
            features,
            text,
        })
    }

    /// Capabilities detected at boot
    pub fn features(&self) -> Features {
        self.features
    }

    /// Configuration in use
    pub fn config(&self) -> &LangSwitchConfig {
        &self.config
    }

    /// Text domain of the admin labels
    pub fn text_domain(&self) -> &TextDomain {
        &self.text
    }
}

fn nonce_config(config: &LangSwitchConfig) -> Result<NonceConfig, BootError> {
    let nonce = match &config.nonce_secret {
        Some(secret) => NonceConfig::new(secret.as_bytes().to_vec())?,
        None => {
            debug!("No form token secret configured, using a per-process secret");
            NonceConfig::ephemeral()
        }
    };
    Ok(nonce.with_token_ttl(config.nonce_ttl_secs)?)
}

fn register_translation_loader(
    bus: &HookBus,
    config: &LangSwitchConfig,
    text: Arc<TextDomain>,
    site: Arc<dyn SiteSettings>,
) {
    let dir = config.languages_dir.clone();
    bus.on(move |_: &mut PluginsLoaded| {
        let locale = site.locale();
        if let Err(err) = text.load(&dir, &locale) {
            warn!(error = %err, locale = %locale, dir = %dir.display(), "Failed to load message catalog");
        }
    });
}

fn register_editor(bus: &HookBus, editor: MetadataEditor) {
    let e = editor.clone();
    bus.on(move |hook: &mut RegisterMetaBoxes| hook.boxes.extend(e.meta_boxes()));

    let e = editor.clone();
    bus.on(move |hook: &mut RenderMetaBox| {
        if hook.box_id != METABOX_ID {
            return;
        }
        match e.render_metabox(&hook.entry, &hook.request) {
            Ok(html) => hook.html = html,
            Err(err) => warn!(entry = %hook.entry.id, error = %err, "Failed to render locale panel"),
        }
    });

    let e = editor.clone();
    bus.on(move |hook: &mut SaveEntry| {
        e.save_entry(&hook.entry, &hook.request);
    });

    let e = editor.clone();
    bus.on(move |hook: &mut QuickEditBox| {
        if hook.column != COLUMN_KEY {
            return;
        }
        match e.render_quick_edit(&hook.entry_type, &hook.request) {
            Ok(Some(html)) => hook.html.push_str(&html),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "Failed to render quick edit locale field"),
        }
    });

    let e = editor.clone();
    bus.on(move |hook: &mut BulkEditBox| {
        if hook.column != COLUMN_KEY {
            return;
        }
        match e.render_bulk_edit(&hook.entry_type, &hook.request) {
            Ok(Some(html)) => hook.html.push_str(&html),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "Failed to render bulk edit locale field"),
        }
    });

    let e = editor.clone();
    bus.on(move |hook: &mut EnqueueAdminAssets| {
        let registry = e.registry();
        if let Some(script) = quick_edit_script(hook.screen.as_ref(), |t| registry.supports(t)) {
            hook.scripts.push(script);
        }
    });

    let e = editor.clone();
    bus.on(move |hook: &mut LoadListScreen| {
        e.bulk_apply(&hook.request);
    });

    let e = editor.clone();
    bus.on(move |hook: &mut ListColumns| e.add_column(&hook.entry_type, &mut hook.columns));

    bus.on(move |hook: &mut RenderListColumn| {
        if let Some(html) = editor.render_cell(&hook.column, hook.entry_id) {
            hook.html = html;
        }
    });
}

fn register_output(bus: &HookBus, filter: OutputFilter) {
    let f = filter.clone();
    bus.add(ATTRIBUTES_PRIORITY, move |hook: &mut LanguageAttributes| {
        hook.output = f.language_attributes(&hook.request, &hook.output);
    });

    bus.on(move |hook: &mut DocumentHead| {
        if let Some(link) = filter.hreflang_link(&hook.request) {
            hook.html.push_str(&link);
        }
    });
}
