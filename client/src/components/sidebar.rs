//! Collapsible project navigation panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar is the dashboard's only surface: it lists the caller's
//! projects, hosts the create/edit modal, routes to a project workspace, and
//! owns the profile footer with sign-out.
//!
//! DATA FLOW
//! =========
//! Listing runs once the session is known. Create/update trigger a full
//! re-fetch through `load_projects`; delete filters the local list.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert::push_alert;
use crate::components::dropdown::{DropdownOption, ThreeDotsDropdown};
use crate::components::project_modal::ProjectModal;
use crate::net::types::User;
use crate::state::alerts::{AlertKind, AlertsState};
use crate::state::auth::AuthState;
use crate::state::projects::{ModalMode, ProjectsState};
use crate::state::ui::UiState;

/// Entries of the per-project three-dots menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectAction {
    Edit,
    Configure,
    Workspace,
    Delete,
}

impl ProjectAction {
    pub const ALL: [Self; 4] = [Self::Edit, Self::Configure, Self::Workspace, Self::Delete];

    pub fn value(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Configure => "configure",
            Self::Workspace => "workspace",
            Self::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Configure => "Configure",
            Self::Workspace => "Workspace",
            Self::Delete => "Delete",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }
}

pub fn project_menu_options() -> Vec<DropdownOption> {
    ProjectAction::ALL
        .into_iter()
        .map(|action| {
            let option = DropdownOption::new(action.value(), action.label());
            if action == ProjectAction::Delete { option.danger() } else { option }
        })
        .collect()
}

pub fn workspace_path(project_id: &str) -> String {
    format!("/app/projects/{project_id}")
}

/// Avatar letter for the profile footer.
pub fn avatar_initial(user: Option<&User>) -> String {
    user.map_or("User", User::display_name)
        .chars()
        .next()
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

/// Fetch the project list into `projects`.
pub fn load_projects(projects: RwSignal<ProjectsState>) {
    projects.update(|p| p.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_projects().await {
            Ok(items) => projects.update(|p| p.replace_all(items)),
            Err(e) => {
                log::warn!("project list failed: {e}");
                projects.update(|p| p.fail_listing(e.to_string()));
            }
        }
    });
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let alerts = expect_context::<RwSignal<AlertsState>>();
    let navigate = use_navigate();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth.get().authenticated {
            return;
        }
        requested.set(true);
        load_projects(projects);
    });

    let on_saved = Callback::new(move |()| load_projects(projects));

    let open_create = move |_| ui.update(|u| u.modal = ModalMode::Create);

    let navigate_workspace = navigate.clone();
    let on_project_action = move |project_id: String, value: String| {
        let Some(action) = ProjectAction::from_value(&value) else {
            return;
        };
        match action {
            ProjectAction::Edit => {
                if let Some(project) = projects.get_untracked().get(&project_id).cloned() {
                    ui.update(|u| u.modal = ModalMode::Edit(project));
                }
            }
            ProjectAction::Configure => {}
            ProjectAction::Workspace => {
                navigate_workspace(&workspace_path(&project_id), NavigateOptions::default());
            }
            ProjectAction::Delete => delete_project(projects, alerts, project_id),
        }
    };

    let navigate_logout = navigate.clone();
    let on_logout = move |_| {
        ui.update(|u| u.profile_menu_open = false);
        let navigate = navigate_logout.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            crate::util::session::browser_session().clear();
            auth.update(|a| {
                a.user = None;
                a.authenticated = false;
            });
            navigate("/login", NavigateOptions::default());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = navigate;
    };

    let expanded = move || ui.get().sidebar_open;
    let width_style = move || format!("width:{}px", ui.get().sidebar_width());

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !expanded() style=width_style>
            <header class="sidebar__header">
                <Show when=expanded>
                    <h2 class="sidebar__title">"Projects"</h2>
                </Show>
                <button
                    class="btn sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if expanded() { "◂" } else { "▸" }}
                </button>
            </header>

            <button class="btn btn--primary sidebar__create" on:click=open_create title="Create Project">
                <span aria-hidden="true">"+"</span>
                <Show when=expanded>
                    <span>"Create Project"</span>
                </Show>
            </button>

            <nav class="sidebar__projects">
                <Show when=move || projects.get().loading>
                    <p class="sidebar__status">"Loading projects..."</p>
                </Show>
                <Show when=move || expanded() && !projects.get().loading && projects.get().items.is_empty()>
                    <p class="sidebar__status">
                        {move || projects.get().error.unwrap_or_else(|| "No projects yet".to_owned())}
                    </p>
                </Show>
                <For
                    each=move || projects.get().items
                    key=|project| project.id.clone()
                    children=move |project| {
                        let id = project.id.clone();
                        let hover_id = project.id.clone();
                        let emphasized_id = project.id.clone();
                        let name = project.name;
                        let title = name.clone();
                        let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
                        let on_action = on_project_action.clone();
                        let on_select = Callback::new(move |value: String| on_action(id.clone(), value));
                        let emphasized = Signal::derive(move || {
                            projects.get().hovered.as_deref() == Some(emphasized_id.as_str())
                        });
                        view! {
                            <div
                                class="sidebar__project"
                                on:mouseenter=move |_| projects.update(|p| p.hovered = Some(hover_id.clone()))
                                on:mouseleave=move |_| projects.update(|p| p.hovered = None)
                                title=title
                            >
                                <span class="sidebar__project-icon" aria-hidden="true">{initial}</span>
                                <Show when=expanded>
                                    <span class="sidebar__project-name">{name.clone()}</span>
                                    <ThreeDotsDropdown
                                        options=project_menu_options()
                                        on_select=on_select
                                        emphasized=emphasized
                                    />
                                </Show>
                            </div>
                        }
                    }
                />
            </nav>

            <footer class="sidebar__profile">
                <Show when=move || expanded() && ui.get().profile_menu_open>
                    <div class="sidebar__profile-menu">
                        <button class="sidebar__profile-item sidebar__profile-item--danger" on:click=on_logout.clone()>
                            "Sign out"
                        </button>
                    </div>
                </Show>
                <button
                    class="sidebar__profile-toggle"
                    on:click=move |_| {
                        if ui.get_untracked().sidebar_open {
                            ui.update(|u| u.profile_menu_open = !u.profile_menu_open);
                        }
                    }
                >
                    <span class="sidebar__avatar">{move || avatar_initial(auth.get().user.as_ref())}</span>
                    <Show when=expanded>
                        <span class="sidebar__identity">
                            <span class="sidebar__user-name">
                                {move || auth.get().user.unwrap_or_default().display_name().to_owned()}
                            </span>
                            <span class="sidebar__user-email">
                                {move || auth.get().user.unwrap_or_default().display_email().to_owned()}
                            </span>
                        </span>
                        <span class="sidebar__chevron" aria-hidden="true">
                            {move || if ui.get().profile_menu_open { "▴" } else { "▾" }}
                        </span>
                    </Show>
                </button>
            </footer>
        </aside>

        <Show when=move || ui.get().modal.is_open()>
            <ProjectModal on_saved=on_saved />
        </Show>
    }
}

fn delete_project(projects: RwSignal<ProjectsState>, alerts: RwSignal<AlertsState>, project_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_project(&project_id).await {
            Ok(()) => {
                projects.update(|p| {
                    p.remove(&project_id);
                });
            }
            Err(e) => {
                log::warn!("project delete failed: {e}");
                push_alert(alerts, AlertKind::Error, e.to_string());
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (projects, alerts, project_id);
}
