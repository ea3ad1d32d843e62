//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once the session check finished and no token was found.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.authenticated
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Settle the session check with whether a token was found.
pub fn resolve_session(state: &mut AuthState, authenticated: bool) {
    state.authenticated = authenticated;
    state.loading = false;
}

/// Read the browser session into `auth`, then fetch the display user.
///
/// Must run after hydration (from an `Effect`): the server renders with
/// `loading` set, and the first client render has to match it.
pub fn load_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let authenticated = crate::util::session::browser_session().is_authenticated();
        auth.update(|a| resolve_session(a, authenticated));
        if authenticated {
            fetch_user(auth);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Fetch the display identity for the sidebar footer. Failures keep the
/// placeholder identity.
pub fn fetch_user(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Ok(user) => auth.update(|a| a.user = Some(user)),
            Err(e) => log::warn!("fetch current user failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}
