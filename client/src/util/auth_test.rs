use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_no_session() {
    let state = AuthState { user: None, authenticated: false, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, authenticated: false, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_with_session_even_before_user_loads() {
    let state = AuthState { user: None, authenticated: true, loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User { name: "Alice".to_owned(), email: "alice@example.com".to_owned() }),
        authenticated: true,
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn initial_state_renders_as_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn resolve_session_with_token_settles_authenticated() {
    let mut state = AuthState::default();
    resolve_session(&mut state, true);
    assert!(!state.loading);
    assert!(state.authenticated);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn resolve_session_without_token_triggers_redirect() {
    let mut state = AuthState::default();
    resolve_session(&mut state, false);
    assert!(should_redirect_unauth(&state));
}
