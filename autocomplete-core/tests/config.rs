use autocomplete_core::{SelectMode, WidgetConfig, WidgetConfigPatch};

#[test]
fn js_patch_overrides_only_given_fields() {
    let patch: WidgetConfigPatch = serde_json::from_str(
        r#"{ "mode": "multi", "maxResults": 10, "noMatchesLabel": "Không có kết quả" }"#,
    )
    .expect("Không đọc được config");

    let config = WidgetConfig::from(patch);

    assert_eq!(config.mode, SelectMode::Multi);
    assert_eq!(config.max_results, Some(10));
    assert_eq!(config.no_matches_label, "Không có kết quả");
    assert_eq!(config.no_options_label, WidgetConfig::default().no_options_label);
    assert_eq!(config.placeholder, "");
}

#[test]
fn empty_patch_is_default_config() {
    let patch: WidgetConfigPatch = serde_json::from_str("{}").expect("Không đọc được config");
    assert_eq!(WidgetConfig::from(patch), WidgetConfig::default());
}

#[test]
fn rust_side_config_fills_missing_fields() {
    let config: WidgetConfig =
        serde_json::from_str(r#"{ "mode": "single", "placeholder": "Search drugs..." }"#)
            .expect("Không đọc được config");

    assert_eq!(config.placeholder, "Search drugs...");
    assert_eq!(config.no_matches_label, "No matches found");
}
