use super::*;

#[test]
fn error_icon_known_codes() {
    assert_eq!(error_icon("404"), "⚠");
    assert_eq!(error_icon("network"), "📡");
}

#[test]
fn error_icon_unknown_code_falls_back() {
    assert_eq!(error_icon("418"), error_icon("404"));
}
