use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_sidebar_open() {
    let state = UiState::default();
    assert!(state.sidebar_open);
    assert_eq!(state.sidebar_width(), SIDEBAR_OPEN_WIDTH);
    assert!(!state.profile_menu_open);
}

#[test]
fn ui_state_default_panels_closed() {
    let state = UiState::default();
    assert_eq!(state.modal, ModalMode::Closed);
    assert!(!state.filter_open);
    assert!(!state.settings_open);
    assert!(!state.mobile_menu_open);
    assert_eq!(state.view, None);
    assert_eq!(state.report, None);
}

#[test]
fn collapsing_sidebar_closes_profile_menu() {
    let mut state = UiState { profile_menu_open: true, ..UiState::default() };
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    assert!(!state.profile_menu_open);
    assert_eq!(state.sidebar_width(), SIDEBAR_CLOSED_WIDTH);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}

// =============================================================
// Dropdown options
// =============================================================

#[test]
fn view_option_round_trips_value() {
    for option in ViewOption::ALL {
        assert_eq!(ViewOption::from_value(option.value()), Some(option));
    }
    assert_eq!(ViewOption::from_value("grid"), None);
    assert_eq!(ViewOption::Card.label(), "Card View");
}

#[test]
fn report_option_labels() {
    assert_eq!(ReportOption::Bug.label(), "BUG");
    assert_eq!(ReportOption::from_value("test-case"), Some(ReportOption::TestCase));
}

// =============================================================
// FilterState
// =============================================================

#[test]
fn filter_state_defaults() {
    let filters = FilterState::default();
    assert_eq!(filters.status, None);
    assert_eq!(filters.requested_outcome, None);
    assert_eq!((filters.avg_time, filters.min_time, filters.max_time, filters.med_time), (50, 10, 90, 60));
}

#[test]
fn filter_clear_restores_defaults() {
    let mut filters = FilterState {
        status: Some("Fail".to_owned()),
        requested_outcome: Some("Pass".to_owned()),
        avg_time: 5,
        min_time: 1,
        max_time: 2,
        med_time: 3,
    };
    filters.clear();
    assert_eq!(filters, FilterState::default());
}

#[test]
fn clamp_time_parses_and_caps() {
    assert_eq!(FilterState::clamp_time("42"), Some(42));
    assert_eq!(FilterState::clamp_time("250"), Some(TIME_SLIDER_MAX));
    assert_eq!(FilterState::clamp_time("abc"), None);
}

#[test]
fn close_workspace_panels_resets_overlays_only() {
    let mut state = UiState { settings_open: true, filter_open: true, mobile_menu_open: true, ..UiState::default() };
    state.toggle_sidebar();
    state.close_workspace_panels();
    assert!(!state.settings_open);
    assert!(!state.filter_open);
    assert!(!state.mobile_menu_open);
    assert!(!state.sidebar_open);
}
