//! Create/edit project dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the sidebar while `UiState::modal` is open. On success the
//! modal shows its confirmation, waits, then asks the sidebar to re-fetch the
//! full project list and fades out.

use leptos::prelude::*;

use crate::components::alert::push_alert;
use crate::net::types::ProjectDraft;
use crate::state::alerts::{AlertKind, AlertsState};
use crate::state::projects::{
    DraftErrors, MODAL_CLOSE_DELAY_MS, MODAL_SUCCESS_DELAY_MS, ModalMode, ProjectsState, validate_draft,
};
use crate::state::ui::UiState;
use crate::util::timer::TimerScope;

#[component]
pub fn ProjectModal(on_saved: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let alerts = expect_context::<RwSignal<AlertsState>>();
    let scope = TimerScope::install();

    let mode = ui.get_untracked().modal;
    let initial = mode.initial_draft();
    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let errors = RwSignal::new(DraftErrors::default());
    let success = RwSignal::new(None::<&'static str>);
    let visible = RwSignal::new(true);
    let title = mode.title();
    let subtitle = mode.subtitle();
    let submit_label = mode.submit_label();
    let is_edit = matches!(mode, ModalMode::Edit(_));
    let mode = StoredValue::new(mode);

    let close = {
        let scope = scope.clone();
        Callback::new(move |()| {
            if projects.get_untracked().submitting {
                return;
            }
            visible.set(false);
            scope.timeout(MODAL_CLOSE_DELAY_MS, move || ui.update(|u| u.modal = ModalMode::Closed));
        })
    };

    let submit = {
        let scope = scope.clone();
        Callback::new(move |()| {
            let draft = ProjectDraft { name: name.get_untracked(), description: description.get_untracked() };
            let draft = match validate_draft(&draft) {
                Ok(draft) => draft,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            let mut claimed = false;
            projects.update(|p| claimed = p.begin_submit());
            if !claimed {
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let scope = scope.clone();
                let mode = mode.get_value();
                leptos::task::spawn_local(async move {
                    let result = match &mode {
                        ModalMode::Edit(project) => crate::net::api::update_project(&project.id, &draft).await,
                        ModalMode::Create | ModalMode::Closed => crate::net::api::create_project(&draft).await,
                    };
                    projects.update(ProjectsState::finish_submit);
                    match result {
                        Ok(()) => {
                            success.set(Some(mode.success_message()));
                            let close_scope = scope.clone();
                            scope.timeout(MODAL_SUCCESS_DELAY_MS, move || {
                                success.set(None);
                                on_saved.run(());
                                visible.set(false);
                                close_scope
                                    .timeout(MODAL_CLOSE_DELAY_MS, move || ui.update(|u| u.modal = ModalMode::Closed));
                            });
                        }
                        Err(e) => {
                            log::warn!("project save failed: {e}");
                            push_alert(alerts, AlertKind::Error, e.to_string());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&scope, draft, mode, alerts, on_saved);
                projects.update(ProjectsState::finish_submit);
            }
        })
    };

    let busy = move || projects.get().submitting;

    view! {
        <div
            class="dialog-backdrop"
            class:dialog-backdrop--hidden=move || !visible.get()
            on:click=move |_| close.run(())
        >
            <div
                class="dialog dialog--project"
                class:dialog--edit=is_edit
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close.run(());
                    }
                }
                tabindex="0"
            >
                <Show when=move || success.get().is_some()>
                    <p class="dialog__success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <header class="dialog__header">
                    <div>
                        <h2>{title}</h2>
                        <p class="dialog__subtitle">{subtitle}</p>
                    </div>
                    <button class="btn dialog__close" on:click=move |_| close.run(()) disabled=busy aria-label="Close">
                        "✕"
                    </button>
                </header>

                <label class="dialog__label">
                    "Project Name"
                    <input
                        class="dialog__input"
                        class:dialog__input--invalid=move || errors.get().name.is_some()
                        type="text"
                        placeholder="Enter project name"
                        disabled=busy
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            errors.update(|e| e.name = None);
                        }
                    />
                </label>
                <Show when=move || errors.get().name.is_some()>
                    <p class="dialog__error">{move || errors.get().name.unwrap_or_default()}</p>
                </Show>

                <label class="dialog__label">
                    "Project Description"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        class:dialog__input--invalid=move || errors.get().description.is_some()
                        rows="4"
                        placeholder="Describe your project"
                        disabled=busy
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            description.set(event_target_value(&ev));
                            errors.update(|e| e.description = None);
                        }
                    ></textarea>
                </label>
                <Show when=move || errors.get().description.is_some()>
                    <p class="dialog__error">{move || errors.get().description.unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close.run(()) disabled=busy>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(()) disabled=busy>
                        {move || if busy() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
