//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert::AlertStack;
use crate::components::error_view::NotFound;
use crate::pages::{auth::AuthPage, dashboard::DashboardPage, home::HomePage, project::ProjectPage};
use crate::state::{alerts::AlertsState, auth::AuthState, projects::ProjectsState, ui::UiState};
use crate::util::auth::load_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, reads the browser session once
/// hydration is done and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let ui = RwSignal::new(UiState::default());
    let alerts = RwSignal::new(AlertsState::default());

    provide_context(auth);
    provide_context(projects);
    provide_context(ui);
    provide_context(alerts);

    // After hydration: the first client render must match the server's `loading` state.
    Effect::new(move |_| load_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/calf.css"/>
        <Title text="Calf"/>

        <Router>
            <AlertStack/>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=AuthPage/>
                <Route path=StaticSegment("app") view=DashboardPage/>
                <Route
                    path=(StaticSegment("app"), StaticSegment("projects"), ParamSegment("id"))
                    view=ProjectPage
                />
            </Routes>
        </Router>
    }
}
