use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On"] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_whitespace_trimmed() {
    assert_eq!(parse_bool("  true  "), Some(true));
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// Config::from_lookup
// =============================================================================

#[test]
fn defaults_when_unset() {
    let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, Config { port: DEFAULT_PORT, site_root: None, require_session_cookie: true });
}

#[test]
fn reads_overrides() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("CALF_SITE_ROOT", "dist/site"),
        ("CALF_REQUIRE_SESSION_COOKIE", "off"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("dist/site")));
    assert!(!cfg.require_session_cookie);
}

#[test]
fn blank_site_root_is_ignored() {
    let cfg = Config::from_lookup(lookup_from(&[("CALF_SITE_ROOT", "   ")])).unwrap();
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_errors() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn out_of_range_port_errors() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn invalid_cookie_flag_errors() {
    let err = Config::from_lookup(lookup_from(&[("CALF_REQUIRE_SESSION_COOKIE", "maybe")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBool { key: "CALF_REQUIRE_SESSION_COOKIE", .. }));
}
