//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/app` renders the project sidebar next to an empty workspace. Visitors
//! without a session are sent to `/login` once the session check settles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let ready = move || {
        let state = auth.get();
        !state.loading && state.authenticated
    };

    view! {
        <Show
            when=ready
            fallback=move || {
                let message = if auth.get().loading { "Loading..." } else { "Redirecting to login..." };
                view! { <div class="page-status">{message}</div> }
            }
        >
            <div class="dashboard">
                <Sidebar />
                <main class="dashboard__main" style:margin-left=move || format!("{}px", ui.get().sidebar_width())>
                    <h1 class="dashboard__title">"Dashboard"</h1>
                    <p class="dashboard__hint">"Select a project from the sidebar or create a new one."</p>
                </main>
            </div>
        </Show>
    }
}
