use autocomplete_core::{filter_options, Autocomplete, DropdownOption, MenuRow, WidgetConfig};

fn drugs() -> Vec<DropdownOption> {
    ["Aspirin", "Amoxicillin", "Ibuprofen"]
        .into_iter()
        .map(DropdownOption::plain)
        .collect()
}

fn labels(widget: &Autocomplete) -> Vec<&str> {
    widget
        .filtered()
        .into_iter()
        .map(|option| option.label.as_str())
        .collect()
}

#[test]
fn substring_match_keeps_original_order() {
    let mut widget = Autocomplete::with_options(WidgetConfig::single(), drugs());
    widget.input("a");

    assert_eq!(labels(&widget), vec!["Aspirin", "Amoxicillin"]);
    assert_eq!(widget.highlighted_index(), Some(0));
}

#[test]
fn exact_match_is_sorted_first_in_any_case() {
    let options = vec![
        DropdownOption::plain("Amoxicillin"),
        DropdownOption::plain("Aspirin"),
        DropdownOption::plain("Ibuprofen"),
    ];

    for query in ["aspirin", "ASPIRIN", "Aspirin"] {
        let mut widget = Autocomplete::with_options(WidgetConfig::single(), options.clone());
        widget.input(query);
        assert_eq!(labels(&widget), vec!["Aspirin"], "query {query}");
    }

    let mut widget = Autocomplete::with_options(WidgetConfig::single(), drugs());
    widget.input("aspirin");
    assert_eq!(labels(&widget), vec!["Aspirin"]);
    assert_eq!(
        widget.highlighted_option(),
        Some(&DropdownOption::plain("Aspirin"))
    );
}

#[test]
fn exact_match_partition_is_stable() {
    let options: Vec<DropdownOption> = ["Insulin glargine", "Insulin", "Insulin lispro", "insulin"]
        .into_iter()
        .map(|label| DropdownOption::new(label, label.to_uppercase() + "-id"))
        .collect();

    let indices = filter_options(&options, "insulin");
    assert_eq!(indices, vec![1, 3, 0, 2]);
}

#[test]
fn result_is_always_a_subsequence_with_exact_first() {
    let options: Vec<DropdownOption> = [
        "Warfarin", "Aspirin", "Paracetamol", "aspirin", "Atorvastatin", "Ramipril", "pirin",
    ]
    .into_iter()
    .enumerate()
    .map(|(index, label)| DropdownOption::new(label, index.to_string()))
    .collect();

    for query in ["", "a", "pirin", "ASPIRIN", "r", "statin", "zzz", "  warfarin "] {
        let indices = filter_options(&options, query);
        let needle = query.trim().to_lowercase();

        let exact: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&index| options[index].label.to_lowercase() == needle)
            .collect();
        let rest: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&index| options[index].label.to_lowercase() != needle)
            .collect();

        assert!(exact.windows(2).all(|pair| pair[0] < pair[1]), "query {query}");
        assert!(rest.windows(2).all(|pair| pair[0] < pair[1]), "query {query}");
        assert_eq!(&indices[..exact.len()], exact.as_slice(), "query {query}");
        for index in &indices {
            assert!(options[*index].label.to_lowercase().contains(&needle));
        }
    }
}

#[test]
fn empty_query_returns_everything() {
    let indices = filter_options(&drugs(), "");
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn no_match_renders_single_placeholder_and_enter_is_noop() {
    let mut widget = Autocomplete::with_options(WidgetConfig::single(), drugs());
    widget.input("zzz");

    assert!(widget.filtered().is_empty());
    assert_eq!(widget.highlighted_index(), None);
    assert_eq!(
        widget.menu(),
        vec![MenuRow::Placeholder {
            label: "No matches found".to_string()
        }]
    );

    let outcome = widget.handle_key(autocomplete_core::Key::Enter);
    assert!(outcome.handled);
    assert_eq!(outcome.event, None);
    assert!(widget.is_open());
    assert!(widget.selected().is_none());
}

#[test]
fn empty_option_list_renders_no_options_placeholder() {
    let mut widget = Autocomplete::new(WidgetConfig::single());
    widget.open();

    assert_eq!(
        widget.menu(),
        vec![MenuRow::Placeholder {
            label: "No options available".to_string()
        }]
    );
}

#[test]
fn max_results_caps_rows() {
    let options: Vec<DropdownOption> = (0..25)
        .map(|index| DropdownOption::plain(format!("Drug {index:02}")))
        .collect();
    let config = WidgetConfig {
        max_results: Some(10),
        ..WidgetConfig::default()
    };

    let mut widget = Autocomplete::with_options(config, options);
    widget.input("drug");

    assert_eq!(widget.filtered().len(), 10);
    assert_eq!(widget.menu().len(), 10);
}

#[test]
fn menu_marks_highlight_and_selection() {
    let mut widget = Autocomplete::with_options(WidgetConfig::multi(), drugs());
    widget.open();
    widget.commit(&DropdownOption::plain("Amoxicillin"));

    let rows = widget.menu();
    assert_eq!(
        rows[1],
        MenuRow::Option {
            label: "Amoxicillin".to_string(),
            value: "Amoxicillin".to_string(),
            highlighted: true,
            selected: true,
        }
    );
    assert!(matches!(
        rows[0],
        MenuRow::Option {
            highlighted: false,
            selected: false,
            ..
        }
    ));
}

#[test]
fn options_deserialize_from_strings_or_objects() {
    let options: Vec<DropdownOption> = serde_json::from_str(
        r#"["Aspirin", {"label": "Ibuprofen 200mg", "value": "ibu-200"}, {"label": "Calpol"}]"#,
    )
    .expect("Không đọc được danh sách lựa chọn");

    assert_eq!(
        options,
        vec![
            DropdownOption::plain("Aspirin"),
            DropdownOption::new("Ibuprofen 200mg", "ibu-200"),
            DropdownOption::plain("Calpol"),
        ]
    );
}
