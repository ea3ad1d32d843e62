use super::*;

#[test]
fn protects_app_and_children() {
    assert!(is_protected("/app"));
    assert!(is_protected("/app/"));
    assert!(is_protected("/app/projects/p1"));
}

#[test]
fn leaves_public_paths_alone() {
    assert!(!is_protected("/"));
    assert!(!is_protected("/login"));
    assert!(!is_protected("/pkg/client.wasm"));
    assert!(!is_protected("/application"));
}

#[test]
fn requires_login_only_without_cookie() {
    assert!(requires_login("/app", false, true));
    assert!(!requires_login("/app", true, true));
}

#[test]
fn disabled_guard_never_redirects() {
    assert!(!requires_login("/app/projects/p1", false, false));
}

#[test]
fn public_path_without_cookie_passes() {
    assert!(!requires_login("/login", false, true));
}

#[test]
fn guard_cookie_is_the_client_session_cookie() {
    assert_eq!(SESSION_COOKIE, client::util::session::TOKEN_COOKIE);
}
