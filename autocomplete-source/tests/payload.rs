use std::fs;

use autocomplete_core::{Autocomplete, AutocompleteError, DropdownOption, WidgetConfig};
use autocomplete_source::{
    capitalize_words, normalize_options, options_or_empty, parse_option_payload, LabelStyle,
};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("Không đọc được file mẫu")
}

#[test]
fn medications_menu_matches_golden() {
    let options = parse_option_payload(&read_fixture("medications_payload.json"), "medications")
        .expect("Không đọc được payload thuốc");
    let options = normalize_options(
        options,
        LabelStyle {
            sort: true,
            capitalize: true,
        },
    );

    let mut widget = Autocomplete::with_options(WidgetConfig::single(), options);
    widget.input("m");

    let actual = serde_json::to_value(widget.menu()).expect("Không serialize menu");
    let expected: Value = serde_json::from_str(&read_fixture("medications_menu_golden.json"))
        .expect("Golden không hợp lệ");

    assert_eq!(actual, expected);
}

#[test]
fn labeled_and_plain_entries_are_both_accepted() {
    let options = parse_option_payload(&read_fixture("conditions_payload.json"), "conditions")
        .expect("Không đọc được payload bệnh");

    assert_eq!(options.len(), 4);
    assert_eq!(options[1], DropdownOption::new("Type 2 diabetes", "E11"));
    assert_eq!(options[3], DropdownOption::plain("Migraine"));
}

#[test]
fn failed_payload_is_rejected_with_backend_message() {
    let result = parse_option_payload(&read_fixture("reactions_failure.json"), "reactions");

    match result {
        Err(AutocompleteError::Rejected(message)) => {
            assert_eq!(message, "Database connection failed")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_items_and_bad_json_are_errors() {
    assert!(matches!(
        parse_option_payload(r#"{"success": true}"#, "drugs"),
        Err(AutocompleteError::MissingData)
    ));
    assert!(matches!(
        parse_option_payload(r#"{"success": true, "drugs": [1, 2]}"#, "drugs"),
        Err(AutocompleteError::Parse(_))
    ));
    assert!(matches!(
        parse_option_payload("<html>502</html>", "drugs"),
        Err(AutocompleteError::Parse(_))
    ));
    assert!(matches!(
        parse_option_payload(r#"{"drugs": ["Aspirin"]}"#, "drugs"),
        Err(AutocompleteError::Rejected(_))
    ));
}

#[test]
fn failed_source_degrades_to_empty_widget() {
    let options = options_or_empty(
        parse_option_payload(&read_fixture("reactions_failure.json"), "reactions"),
        "/api/reactions",
    );
    assert!(options.is_empty());

    let mut widget = Autocomplete::with_options(WidgetConfig::single(), options);
    widget.input("rash");
    assert!(widget.filtered().is_empty());
    assert_eq!(widget.commit_highlighted(), None);
}

#[test]
fn normalize_dedupes_by_value_and_keeps_order_without_sort() {
    let options = vec![
        DropdownOption::plain("warfarin"),
        DropdownOption::plain("calpol"),
        DropdownOption::plain("warfarin"),
    ];

    let normalized = normalize_options(options, LabelStyle::default());

    assert_eq!(
        normalized,
        vec![
            DropdownOption::plain("warfarin"),
            DropdownOption::plain("calpol"),
        ]
    );
}

#[test]
fn capitalize_matches_word_boundaries() {
    assert_eq!(capitalize_words("blood clot prevention"), "Blood Clot Prevention");
    assert_eq!(capitalize_words("vitamin b-12"), "Vitamin B-12");
    assert_eq!(capitalize_words("GERD"), "GERD");
    assert_eq!(capitalize_words(""), "");
}
