use autocomplete_core::{Autocomplete, DropdownOption, WidgetConfig};
use autocomplete_source::RequestSequencer;

#[test]
fn stale_response_never_overwrites_fresher_data() {
    let mut sequencer = RequestSequencer::new();
    let mut widget = Autocomplete::new(WidgetConfig::single());
    widget.input("asp");

    let first = sequencer.issue();
    let second = sequencer.issue();
    assert_eq!(sequencer.latest_issued(), Some(second));

    if sequencer.accept(second) {
        widget.set_options(vec![DropdownOption::plain("Aspirin 81mg")]);
    }
    if sequencer.accept(first) {
        widget.set_options(vec![DropdownOption::plain("Aspirin")]);
    }

    assert_eq!(widget.options(), &[DropdownOption::plain("Aspirin 81mg")]);
    assert_eq!(widget.query(), "asp");
}

#[test]
fn in_order_responses_are_all_applied() {
    let mut sequencer = RequestSequencer::new();
    assert_eq!(sequencer.latest_issued(), None);

    let first = sequencer.issue();
    assert!(sequencer.accept(first));
    let second = sequencer.issue();
    assert!(sequencer.accept(second));
    assert!(!sequencer.accept(second));
    assert_eq!(second.get(), 2);
}
