//! Full-page error view used for unknown routes.

#[cfg(test)]
#[path = "error_view_test.rs"]
mod error_view_test;

use leptos::prelude::*;

pub const NOT_FOUND_DESCRIPTION: &str =
    "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable.";

/// Icon glyph for an error code; unknown codes fall back to the warning sign.
pub fn error_icon(code: &str) -> &'static str {
    match code {
        "500" => "🖥",
        "403" => "🐞",
        "network" => "📡",
        _ => "⚠",
    }
}

#[component]
pub fn ErrorView(
    #[prop(into, default = "404".to_owned())] code: String,
    #[prop(into, default = "Page Not Found".to_owned())] title: String,
    #[prop(into, default = NOT_FOUND_DESCRIPTION.to_owned())] description: String,
) -> impl IntoView {
    let icon = error_icon(&code);

    view! {
        <div class="error-view">
            <div class="error-view__icon" aria-hidden="true">{icon}</div>
            <h1 class="error-view__code">{code}</h1>
            <h2 class="error-view__title">{title}</h2>
            <p class="error-view__description">{description}</p>
            <div class="error-view__actions">
                <a class="btn btn--primary" href="/">"Go Home"</a>
                <button
                    class="btn"
                    on:click=move |_| {
                        #[cfg(feature = "hydrate")]
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                >
                    "Go Back"
                </button>
                <button
                    class="btn"
                    on:click=move |_| {
                        #[cfg(feature = "hydrate")]
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                >
                    "Refresh Page"
                </button>
            </div>
        </div>
    }
}

/// Fallback for routes that match nothing.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! { <ErrorView /> }
}
