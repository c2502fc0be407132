use std::cell::Cell;

use autocomplete_core::PageRegistry;

#[test]
fn listener_is_installed_once_per_page() {
    let installs = Cell::new(0);
    let mut registry: PageRegistry<&str> = PageRegistry::new();

    for anchor in ["#drug", "#cause", "#condition", "#medication"] {
        registry.register(anchor);
        registry.ensure_listener(|| installs.set(installs.get() + 1));
    }

    assert_eq!(installs.get(), 1);
    assert!(registry.listener_installed());
    assert_eq!(registry.len(), 4);
}

#[test]
fn click_inside_any_anchor_closes_nothing() {
    let mut registry = PageRegistry::new();
    registry.register("#drug");
    registry.register("#cause");

    let targets = registry.outside_click_targets(|anchor| *anchor == "#cause");

    assert!(targets.is_empty());
}

#[test]
fn click_outside_all_anchors_targets_every_widget() {
    let mut registry = PageRegistry::new();
    let drug = registry.register("#drug");
    let cause = registry.register("#cause");

    let targets = registry.outside_click_targets(|_| false);

    assert_eq!(targets, vec![drug, cause]);
}

#[test]
fn unregister_removes_only_that_widget() {
    let mut registry = PageRegistry::new();
    let drug = registry.register("#drug");
    let cause = registry.register("#cause");

    assert_eq!(registry.unregister(drug), Some("#drug"));
    assert_eq!(registry.unregister(drug), None);
    assert_eq!(registry.get(cause), Some(&"#cause"));
    assert_eq!(registry.outside_click_targets(|_| false), vec![cause]);

    let next = registry.register("#medication");
    assert_ne!(next, drug);
    assert_eq!(next.to_string(), "autocomplete-2");
}
