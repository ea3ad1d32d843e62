//! Page guard for the authenticated area.
//!
//! The browser mirrors its session token into a `token` cookie, so a page
//! load of `/app` without that cookie can be redirected before rendering.
//! The cookie is only checked for presence; the backend remains the
//! authority on whether the token is valid.

#[cfg(test)]
#[path = "session_guard_test.rs"]
mod tests;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

pub use client::util::session::TOKEN_COOKIE as SESSION_COOKIE;

const LOGIN_PATH: &str = "/login";

/// True for `/app` and anything beneath it.
pub fn is_protected(path: &str) -> bool {
    path == "/app" || path.starts_with("/app/")
}

/// Whether a request for `path` must be sent to the login page.
pub fn requires_login(path: &str, has_cookie: bool, enabled: bool) -> bool {
    enabled && !has_cookie && is_protected(path)
}

/// Middleware redirecting cookie-less `/app` page loads to `/login`.
pub async fn guard(State(enabled): State<bool>, jar: CookieJar, req: Request, next: Next) -> Response {
    let has_cookie = jar.get(SESSION_COOKIE).is_some_and(|c| !c.value().is_empty());
    let path = req.uri().path();
    if requires_login(path, has_cookie, enabled) {
        tracing::debug!(%path, "no session cookie; redirecting to login");
        return Redirect::temporary(LOGIN_PATH).into_response();
    }
    next.run(req).await
}
