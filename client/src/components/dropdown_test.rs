use super::*;

fn view_options() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("chart", "Chart View"),
        DropdownOption::new("table", "Table View"),
        DropdownOption::new("card", "Card View"),
    ]
}

// =============================================================
// filter_options
// =============================================================

#[test]
fn filter_options_blank_term_keeps_all() {
    assert_eq!(filter_options(&view_options(), "  ").len(), 3);
}

#[test]
fn filter_options_matches_label_case_insensitively() {
    let hits = filter_options(&view_options(), "TABLE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].value, "table");
}

#[test]
fn filter_options_matches_value() {
    let options = vec![DropdownOption::new("test-case", "Test Case"), DropdownOption::new("bug", "BUG")];
    let hits = filter_options(&options, "test-");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label, "Test Case");
}

#[test]
fn filter_options_no_match_is_empty() {
    assert!(filter_options(&view_options(), "gantt").is_empty());
    assert_eq!(empty_message("gantt"), "No results found");
    assert_eq!(empty_message(""), "No options available");
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_value_adds_then_removes() {
    let once = toggle_value(&[], "chart");
    assert_eq!(once, vec!["chart".to_owned()]);
    let twice = toggle_value(&once, "table");
    assert_eq!(twice, vec!["chart".to_owned(), "table".to_owned()]);
    assert_eq!(toggle_value(&twice, "chart"), vec!["table".to_owned()]);
}

#[test]
fn display_text_variants() {
    let options = view_options();
    assert_eq!(display_text(&options, &[], "View Options"), "View Options");
    assert_eq!(display_text(&options, &["card".to_owned()], "View Options"), "Card View");
    assert_eq!(display_text(&options, &["chart".to_owned(), "card".to_owned()], "x"), "2 selected");
    assert_eq!(display_text(&options, &["unknown".to_owned()], "x"), "unknown");
}

#[test]
fn option_builders_set_flags() {
    let option = DropdownOption::new("delete", "Delete").danger().disabled(true);
    assert!(option.danger);
    assert!(option.disabled);
}
