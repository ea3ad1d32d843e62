//! Project workspace page at `/app/projects/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches one project by id and renders it under the workspace navbar. A
//! rejected session is reported with a login link rather than a generic
//! failure.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::net::error::ApiError;
use crate::net::types::Project;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch project";

/// Message shown when loading the project fails.
pub fn project_error_message(err: &ApiError) -> &'static str {
    if err.is_unauthorized() { "Unauthorized: Please log in" } else { FETCH_FAILED_MESSAGE }
}

/// Document title for a loaded project.
pub fn page_title(project: &Project) -> String {
    format!("{} - {}", project.name, project.description)
}

/// Load outcome for the current route id.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Load {
    Pending,
    Ready(Project),
    Failed { message: &'static str, unauthorized: bool },
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let load = RwSignal::new(Load::Pending);

    Effect::new(move |prev: Option<(Option<String>, bool)>| {
        let key = (params.get().get("id"), auth.get().authenticated);
        if !key.1 || prev.as_ref() == Some(&key) {
            return key;
        }
        load.set(Load::Pending);
        if let Some(project_id) = key.0.clone() {
            fetch_project(project_id, load);
        }
        key
    });

    let project_name = Signal::derive(move || match load.get() {
        Load::Ready(project) => Some(project.name),
        _ => None,
    });

    view! {
        <div class="project-page">
            <Sidebar />
            <div class="project-page__main">
                <Navbar project_name=project_name />
                {move || match load.get() {
                    Load::Pending => view! { <div class="page-status">"Loading..."</div> }.into_any(),
                    Load::Ready(project) => {
                        let title = page_title(&project);
                        let created = project.created_at.clone().unwrap_or_else(|| "-".to_owned());
                        view! {
                            <Title text=title />
                            <section class="project-detail">
                                <h1>{project.name}</h1>
                                <p>{project.description}</p>
                                <p class="project-detail__meta">"Created At: " {created}</p>
                            </section>
                        }
                            .into_any()
                    }
                    Load::Failed { message, unauthorized } => {
                        view! {
                            <div class="project-error">
                                <p>{message}</p>
                                <Show when=move || unauthorized>
                                    <a class="btn btn--primary" href="/login">"Please log in to continue"</a>
                                </Show>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn fetch_project(id: String, load: RwSignal<Load>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_project(&id).await {
            Ok(project) => load.set(Load::Ready(project)),
            Err(e) => {
                log::warn!("fetch project {id} failed: {e}");
                load.set(Load::Failed { message: project_error_message(&e), unauthorized: e.is_unauthorized() });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, load);
}
