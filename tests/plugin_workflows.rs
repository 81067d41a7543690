//! Integration tests for the plugin wired onto a hook bus.
//!
//! The host side is simulated with the in-memory doubles; every interaction
//! goes through event dispatch, the way a real host drives the plugin.

use langswitch::langswitch_core::events::*;
use langswitch::langswitch_core::testing::{StaticPrincipal, StaticProbe, TestHost};
use langswitch::langswitch_core::{ConfigError, MAX_NONCE_TTL_SECS};
use langswitch::prelude::*;

const KEY: &str = "_html_lang_locale";
const SECRET: &str = "integration-secret-0123456789abcdef";

// =============================================================================
// Fixtures
// =============================================================================

fn host() -> TestHost {
    TestHost::new("en")
        .with_entry(Entry::new(1, "post"))
        .with_entry(Entry::new(2, "page"))
        .with_entry(Entry::new(3, "product"))
}

fn config() -> LangSwitchConfig {
    LangSwitchConfig::default().with_nonce_secret(SECRET)
}

fn boot(host: &TestHost, probe: StaticProbe, admin: bool) -> (HookBus, Plugin) {
    let bus = HookBus::new();
    let plugin = Plugin::boot(&bus, host.services(), &probe, config(), admin).unwrap();
    (bus, plugin)
}

fn editor(id: u64) -> RequestContext {
    RequestContext::new(StaticPrincipal::editor(id).shared())
}

fn visitor(entry: u64) -> RequestContext {
    RequestContext::new(StaticPrincipal::visitor().shared())
        .with_view(View::Singular(Some(EntryId(entry))))
}

/// Value of the hidden input named `field` in rendered markup.
fn hidden_value(html: &str, field: &str) -> String {
    let marker = format!(r#"name="{field}" value=""#);
    let start = html.find(&marker).expect("hidden field rendered") + marker.len();
    html[start..].split('"').next().unwrap().to_string()
}

fn render_metabox(bus: &HookBus, entry: Entry, request: RequestContext) -> String {
    bus.apply(RenderMetaBox {
        box_id: "hls_lang_box".to_string(),
        entry,
        request,
        html: String::new(),
    })
    .html
}

fn render_bulk(bus: &HookBus, entry_type: &str, request: RequestContext) -> String {
    bus.apply(BulkEditBox {
        column: "hls_locale".to_string(),
        entry_type: entry_type.to_string(),
        request,
        html: String::new(),
    })
    .html
}

fn attributes(bus: &HookBus, request: RequestContext) -> String {
    bus.apply(LanguageAttributes {
        request,
        output: r#"lang="en""#.to_string(),
    })
    .output
}

fn head(bus: &HookBus, request: RequestContext) -> String {
    bus.apply(DocumentHead {
        request,
        html: String::new(),
    })
    .html
}

// =============================================================================
// Edit screen
// =============================================================================

#[test]
fn test_edit_screen_save_then_render() {
    let host = host();
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let boxes = bus.apply(RegisterMetaBoxes::default()).boxes;
    let types: Vec<&str> = boxes.iter().map(|b| b.entry_type.as_str()).collect();
    assert_eq!(types, vec!["post", "page"]);
    assert!(boxes.iter().all(|b| b.context == MetaBoxContext::Side));

    let panel = render_metabox(&bus, Entry::new(2, "page"), editor(1));
    let token = hidden_value(&panel, "hls_nonce");

    bus.dispatch(&mut SaveEntry {
        entry: Entry::new(2, "page"),
        request: editor(1).with_form(
            FormData::new()
                .with("hls_nonce", token)
                .with("hls_locale", "es-AR"),
        ),
    });
    assert_eq!(host.meta.get(EntryId(2), KEY).as_deref(), Some("es-AR"));

    let panel = render_metabox(&bus, Entry::new(2, "page"), editor(1));
    assert!(panel.contains("<option value='es-AR' selected='selected'>es-AR</option>"));

    assert_eq!(attributes(&bus, visitor(2)), r#"lang="es-AR" dir="ltr""#);
    assert_eq!(
        head(&bus, visitor(2)),
        "<link rel=\"alternate\" hreflang=\"es-AR\" href=\"https://example.com/?p=2\" />\n"
    );
}

#[test]
fn test_other_panels_are_left_alone() {
    let host = host();
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let html = bus
        .apply(RenderMetaBox {
            box_id: "postexcerpt".to_string(),
            entry: Entry::new(1, "post"),
            request: editor(1),
            html: "excerpt".to_string(),
        })
        .html;
    assert_eq!(html, "excerpt");
}

#[test]
fn test_token_from_another_user_is_rejected() {
    let host = host();
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let panel = render_metabox(&bus, Entry::new(1, "post"), editor(1));
    let token = hidden_value(&panel, "hls_nonce");

    bus.dispatch(&mut SaveEntry {
        entry: Entry::new(1, "post"),
        request: editor(2).with_form(
            FormData::new()
                .with("hls_nonce", token)
                .with("hls_locale", "ru"),
        ),
    });
    assert_eq!(host.meta.get(EntryId(1), KEY), None);
}

#[test]
fn test_autosave_is_ignored() {
    let host = host();
    host.meta.seed(1, KEY, "ru");
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let panel = render_metabox(&bus, Entry::new(1, "post"), editor(1));
    let token = hidden_value(&panel, "hls_nonce");

    bus.dispatch(&mut SaveEntry {
        entry: Entry::new(1, "post"),
        request: editor(1)
            .autosave(true)
            .with_form(FormData::new().with("hls_nonce", token).with("hls_locale", "")),
    });
    assert_eq!(host.meta.get(EntryId(1), KEY).as_deref(), Some("ru"));
}

// =============================================================================
// Quick edit and bulk edit
// =============================================================================

#[test]
fn test_quick_edit_panel_and_save() {
    let host = host();
    host.meta.seed(1, KEY, "ru");
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let panel = |column: &str, entry_type: &str| {
        bus.apply(QuickEditBox {
            column: column.to_string(),
            entry_type: entry_type.to_string(),
            request: editor(1),
            html: String::new(),
        })
        .html
    };
    assert!(panel("author", "post").is_empty());
    assert!(panel("hls_locale", "product").is_empty());

    let html = panel("hls_locale", "post");
    assert!(html.contains(r#"class="hls-locale-select""#));
    let token = hidden_value(&html, "hls_inline_nonce");

    bus.dispatch(&mut SaveEntry {
        entry: Entry::new(1, "post"),
        request: editor(1).with_form(
            FormData::new()
                .with("hls_inline_nonce", token)
                .with("hls_locale", ""),
        ),
    });
    assert_eq!(host.meta.get(EntryId(1), KEY), None);
}

#[test]
fn test_quick_edit_sync_script() {
    let host = host();
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let scripts = |screen: Option<Screen>| {
        bus.apply(EnqueueAdminAssets {
            screen,
            scripts: Vec::new(),
        })
        .scripts
    };
    let enqueued = scripts(Some(Screen::list("post")));
    assert_eq!(enqueued.len(), 1);
    assert_eq!(enqueued[0].handle, "hls-inline");

    assert!(scripts(Some(Screen::list("product"))).is_empty());
    assert!(scripts(Some(Screen::new("post", Some("post")))).is_empty());
    assert!(scripts(None).is_empty());
}

#[test]
fn test_bulk_edit_workflow() {
    let host = host();
    host.meta.seed(1, KEY, "ru");
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let html = render_bulk(&bus, "post", editor(1));
    assert!(html.contains("<option value='__nochange__'>— No change —</option>"));
    let token = hidden_value(&html, "hls_bulk_nonce");

    let form = FormData::new()
        .with("bulk_edit", "Update")
        .with("hls_bulk_nonce", token)
        .with("hls_locale_bulk", "fa-IR")
        .with("post[]", "1")
        .with("post[]", "2")
        .with("post[]", "3");

    // Host fires the per-entry save first; it must defer.
    bus.dispatch(&mut SaveEntry {
        entry: Entry::new(1, "post"),
        request: editor(1).with_form(form.clone()),
    });
    assert_eq!(host.meta.get(EntryId(1), KEY).as_deref(), Some("ru"));

    bus.dispatch(&mut LoadListScreen {
        request: editor(1).with_form(form),
    });
    assert_eq!(host.meta.get(EntryId(1), KEY).as_deref(), Some("fa-IR"));
    assert_eq!(host.meta.get(EntryId(2), KEY).as_deref(), Some("fa-IR"));
    assert_eq!(host.meta.get(EntryId(3), KEY), None);

    assert_eq!(attributes(&bus, visitor(1)), r#"lang="fa-IR" dir="rtl""#);
}

#[test]
fn test_bulk_sentinel_and_permissions() {
    let host = host();
    host.meta.seed(1, KEY, "ru");
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let limited = || RequestContext::new(StaticPrincipal::limited(5, [2]).shared());
    let token = hidden_value(&render_bulk(&bus, "page", limited()), "hls_bulk_nonce");

    let submit = |locale: &str| {
        bus.dispatch(&mut LoadListScreen {
            request: limited().with_form(
                FormData::new()
                    .with("hls_bulk_nonce", token.clone())
                    .with("hls_locale_bulk", locale)
                    .with("post[]", "1")
                    .with("post[]", "2"),
            ),
        });
    };

    submit("__nochange__");
    assert_eq!(host.meta.get(EntryId(1), KEY).as_deref(), Some("ru"));
    assert_eq!(host.meta.get(EntryId(2), KEY), None);
    assert_eq!(host.meta.write_count(), 0);

    submit("it-IT");
    assert_eq!(host.meta.get(EntryId(1), KEY).as_deref(), Some("ru"));
    assert_eq!(host.meta.get(EntryId(2), KEY).as_deref(), Some("it-IT"));
}

// =============================================================================
// List column
// =============================================================================

#[test]
fn test_list_column() {
    let host = host();
    host.meta.seed(2, KEY, "de-DE");
    let (bus, _) = boot(&host, StaticProbe::empty(), true);

    let columns = bus.apply(ListColumns::new(
        "page",
        vec![("title".to_string(), "Title".to_string())],
    ));
    assert_eq!(columns.label("hls_locale"), Some("Lang"));

    let columns = bus.apply(ListColumns::new("product", Vec::new()));
    assert!(columns.columns.is_empty());

    let cell = |id: u64| {
        bus.apply(RenderListColumn {
            entry_type: "page".to_string(),
            column: "hls_locale".to_string(),
            entry_id: EntryId(id),
            html: String::new(),
        })
        .html
    };
    assert_eq!(cell(2), r#"<span class="hls-locale-data" data-hls="de-DE">de-DE</span>"#);
    assert_eq!(cell(1), r#"<span class="hls-locale-data" data-hls="">—</span>"#);
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn test_output_without_override_is_untouched() {
    let host = host();
    let (bus, _) = boot(&host, StaticProbe::empty(), false);

    assert_eq!(attributes(&bus, visitor(1)), r#"lang="en""#);
    assert!(head(&bus, visitor(1)).is_empty());
}

#[test]
fn test_no_hint_when_override_matches_site() {
    let host = host();
    host.meta.seed(1, KEY, "en");
    let (bus, _) = boot(&host, StaticProbe::empty(), false);

    assert_eq!(attributes(&bus, visitor(1)), r#"lang="en" dir="ltr""#);
    assert!(head(&bus, visitor(1)).is_empty());
}

#[test]
fn test_hint_when_site_locale_uses_other_separator() {
    let host = TestHost::new("en_US").with_entry(Entry::new(1, "post"));
    host.meta.seed(1, KEY, "en-US");
    let (bus, _) = boot(&host, StaticProbe::empty(), false);

    assert_eq!(
        head(&bus, visitor(1)),
        "<link rel=\"alternate\" hreflang=\"en-US\" href=\"https://example.com/?p=1\" />\n"
    );
}

#[test]
fn test_attributes_run_after_host_defaults() {
    let host = host();
    host.meta.seed(1, KEY, "ur");
    let (bus, _) = boot(&host, StaticProbe::empty(), false);
    bus.on(|hook: &mut LanguageAttributes| hook.output = r#"lang="en-GB""#.to_string());

    assert_eq!(attributes(&bus, visitor(1)), r#"lang="ur" dir="rtl""#);
    assert_eq!(
        attributes(&bus, RequestContext::new(StaticPrincipal::visitor().shared())),
        r#"lang="en-GB""#
    );
}

#[test]
fn test_front_end_boot_has_no_editor() {
    let host = host();
    let (bus, plugin) = boot(&host, StaticProbe::empty(), false);

    assert!(!plugin.features().admin_enabled());
    assert!(bus.apply(RegisterMetaBoxes::default()).boxes.is_empty());
    assert!(!bus.has_handlers::<SaveEntry>());
    assert!(bus.has_handlers::<LanguageAttributes>());
}

// =============================================================================
// Competitor detection
// =============================================================================

#[test]
fn test_competitor_disables_everything_but_translations() {
    for probe in [
        StaticProbe::empty().with_constant("ICL_SITEPRESS_VERSION"),
        StaticProbe::empty().with_class("SitePress"),
        StaticProbe::empty().with_class("Polylang"),
        StaticProbe::empty().with_constant("POLYLANG_VERSION"),
    ] {
        let host = host();
        host.meta.seed(1, KEY, "ru");
        let (bus, plugin) = boot(&host, probe, true);

        assert!(plugin.features().competitor.is_some());
        assert_eq!(bus.total_handlers(), 1);
        assert!(bus.has_handlers::<PluginsLoaded>());

        assert!(bus.apply(RegisterMetaBoxes::default()).boxes.is_empty());
        assert!(bus.apply(ListColumns::new("post", Vec::new())).columns.is_empty());
        assert_eq!(attributes(&bus, visitor(1)), r#"lang="en""#);
        assert!(head(&bus, visitor(1)).is_empty());
    }
}

// =============================================================================
// Extension hooks
// =============================================================================

#[test]
fn test_extension_hooks() {
    let host = host();
    let (bus, _) = boot(&host, StaticProbe::empty(), true);
    bus.on(|hook: &mut SupportedEntryTypes| hook.types.push("product".to_string()));
    bus.on(|hook: &mut SupportedLocales| {
        hook.catalog.insert("he-IL", "עברית");
        hook.catalog.remove("de-DE");
    });

    let boxes = bus.apply(RegisterMetaBoxes::default()).boxes;
    assert!(boxes.iter().any(|b| b.entry_type == "product"));

    let panel = render_metabox(&bus, Entry::new(3, "product"), editor(1));
    assert!(panel.contains("<option value='he-IL'>עברית</option>"));
    assert!(!panel.contains("de-DE"));
}

// =============================================================================
// Translations
// =============================================================================

#[test]
fn test_catalog_file_translates_labels() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("html-lang-switcher-de_DE.json"),
        r#"{"Lang": "Sprache", "Page language (HTML lang)": "Seitensprache (HTML lang)"}"#,
    )
    .unwrap();

    let host = TestHost::new("de_DE").with_entry(Entry::new(1, "post"));
    let bus = HookBus::new();
    let config = config().with_languages_dir(dir.path());
    let plugin = Plugin::boot(&bus, host.services(), &StaticProbe::empty(), config, true).unwrap();

    bus.dispatch(&mut PluginsLoaded);
    assert_eq!(plugin.text_domain().active_locale().as_deref(), Some("de_DE"));

    let columns = bus.apply(ListColumns::new("post", Vec::new()));
    assert_eq!(columns.label("hls_locale"), Some("Sprache"));
    assert_eq!(
        bus.apply(RegisterMetaBoxes::default()).boxes[0].title,
        "Seitensprache (HTML lang)"
    );
}

#[test]
fn test_builtin_russian_labels() {
    let host = TestHost::new("ru_RU").with_entry(Entry::new(1, "post"));
    let bus = HookBus::new();
    let config = config().with_languages_dir("/nonexistent/languages");
    Plugin::boot(&bus, host.services(), &StaticProbe::empty(), config, true).unwrap();

    bus.dispatch(&mut PluginsLoaded);
    let columns = bus.apply(ListColumns::new("post", Vec::new()));
    assert_eq!(columns.label("hls_locale"), Some("Язык"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_invalid_configuration_refuses_to_boot() {
    let host = host();
    let bus = HookBus::new();
    let config = LangSwitchConfig::default().with_nonce_ttl(0);

    let err = Plugin::boot(&bus, host.services(), &StaticProbe::empty(), config, true)
        .err()
        .unwrap();
    assert!(matches!(err, BootError::Config(_)));
    assert_eq!(bus.total_handlers(), 0);
}

#[test]
fn test_token_lifetime_is_bounded() {
    let err = config()
        .with_env_vars([("LANGSWITCH_NONCE_TTL_SECS", "9223372036854775807")])
        .err()
        .unwrap();
    assert!(matches!(err, ConfigError::ValidationError { field: "nonce_ttl_secs", .. }));

    let host = host();
    let bus = HookBus::new();
    let err = Plugin::boot(&bus, host.services(), &StaticProbe::empty(), config_with_ttl(i64::MAX), true)
        .err()
        .unwrap();
    assert!(matches!(err, BootError::Config(_)));

    let bus = HookBus::new();
    Plugin::boot(
        &bus,
        host.services(),
        &StaticProbe::empty(),
        config_with_ttl(MAX_NONCE_TTL_SECS),
        true,
    )
    .unwrap();
    let html = render_metabox(&bus, Entry::new(1, "post"), editor(1));
    assert!(!hidden_value(&html, "hls_nonce").is_empty());
}

fn config_with_ttl(ttl: i64) -> LangSwitchConfig {
    let mut config = config();
    config.nonce_ttl_secs = ttl;
    config
}

#[test]
fn test_custom_meta_key() {
    let host = host();
    let bus = HookBus::new();
    let config = config().with_meta_key("_custom_lang");
    Plugin::boot(&bus, host.services(), &StaticProbe::empty(), config, false).unwrap();

    host.meta.seed(1, "_custom_lang", "it-IT");
    host.meta.seed(2, KEY, "it-IT");
    assert_eq!(attributes(&bus, visitor(1)), r#"lang="it-IT" dir="ltr""#);
    assert_eq!(attributes(&bus, visitor(2)), r#"lang="en""#);
}

#[test]
fn test_tokens_survive_restart_with_shared_secret() {
    let host = host();
    let (first, _) = boot(&host, StaticProbe::empty(), true);
    let token = hidden_value(
        &render_metabox(&first, Entry::new(1, "post"), editor(1)),
        "hls_nonce",
    );

    let (second, _) = boot(&host, StaticProbe::empty(), true);
    second.dispatch(&mut SaveEntry {
        entry: Entry::new(1, "post"),
        request: editor(1).with_form(FormData::new().with("hls_nonce", token).with("hls_locale", "en-IN")),
    });
    assert_eq!(host.meta.get(EntryId(1), KEY).as_deref(), Some("en-IN"));
}
