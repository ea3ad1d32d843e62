//! Project workspace navbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered at the top of `/app/projects/:id`. Everything here is local UI
//! state: search text, view/report selections and filters never leave the
//! browser.
//!
//! TRADE-OFFS
//! ==========
//! The settings panel locks body scroll while open. Unlocking waits for the
//! slide-out animation, so the restore runs on a scoped timer that is
//! cancelled if the panel reopens first.

use leptos::prelude::*;

use crate::components::dropdown::{Dropdown, DropdownOption};
use crate::components::filter_panel::FilterPanel;
use crate::state::ui::{FilterState, ReportOption, UiState, ViewOption};
use crate::util::scroll_lock::{self, SCROLL_RESTORE_DELAY_MS};
use crate::util::timer::{TimerGuard, TimerScope};

fn view_options() -> Vec<DropdownOption> {
    ViewOption::ALL.into_iter().map(|v| DropdownOption::new(v.value(), v.label())).collect()
}

fn report_options() -> Vec<DropdownOption> {
    ReportOption::ALL.into_iter().map(|r| DropdownOption::new(r.value(), r.label())).collect()
}

#[component]
pub fn Navbar(#[prop(into)] project_name: Signal<Option<String>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let filters = RwSignal::new(FilterState::default());
    let search = RwSignal::new(String::new());
    let view_selected = RwSignal::new(Vec::<String>::new());
    let report_selected = RwSignal::new(Vec::<String>::new());
    let scope = TimerScope::install();
    let restore = StoredValue::new(None::<TimerGuard>);

    Effect::new(move |was_open: Option<bool>| {
        let open = ui.get().settings_open;
        if open {
            if let Some(guard) = restore.get_value() {
                guard.cancel();
            }
            scroll_lock::lock();
        } else if was_open == Some(true) {
            restore.set_value(Some(scope.timeout(SCROLL_RESTORE_DELAY_MS, scroll_lock::unlock)));
        }
        open
    });
    on_cleanup(move || {
        scroll_lock::unlock();
        let _ = ui.try_update(UiState::close_workspace_panels);
    });

    let on_view = Callback::new(move |values: Vec<String>| {
        ui.update(|u| u.view = values.first().and_then(|v| ViewOption::from_value(v)));
    });
    let on_report = Callback::new(move |values: Vec<String>| {
        ui.update(|u| u.report = values.first().and_then(|v| ReportOption::from_value(v)));
    });
    let close_filters = Callback::new(move |()| ui.update(|u| u.filter_open = false));
    let toggle_settings = move |_| ui.update(|u| u.settings_open = !u.settings_open);

    let title = move || project_name.get().unwrap_or_else(|| "Loading...".to_owned());

    view! {
        <nav class="navbar">
            <div class="navbar__left">
                <button
                    class="btn navbar__filter-toggle"
                    on:click=move |_| ui.update(|u| u.filter_open = !u.filter_open)
                >
                    "Test Types"
                </button>
                <span class="navbar__project-name">{title}</span>
            </div>

            <div class="navbar__controls" class:navbar__controls--open=move || ui.get().mobile_menu_open>
                <label class="navbar__search" class:navbar__search--focused=move || ui.get().search_focused>
                    <span aria-hidden="true">"⌕"</span>
                    <input
                        type="text"
                        placeholder="Search..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        on:focus=move |_| ui.update(|u| u.search_focused = true)
                        on:blur=move |_| ui.update(|u| u.search_focused = false)
                    />
                </label>
                <Dropdown
                    options=view_options()
                    selected=view_selected
                    placeholder="View Options"
                    on_change=on_view
                />
                <Dropdown
                    options=report_options()
                    selected=report_selected
                    placeholder="Report Options"
                    on_change=on_report
                />
                <button
                    class="btn navbar__filter"
                    on:click=move |_| ui.update(|u| u.filter_open = !u.filter_open)
                >
                    "Filter"
                </button>
                <button class="btn navbar__comment">"Add Comment"</button>
                <button class="btn navbar__settings" on:click=toggle_settings aria-label="Settings">
                    "⚙"
                </button>
            </div>

            <button
                class="btn navbar__menu"
                aria-label="Menu"
                on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
            >
                {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
            </button>
        </nav>

        <Show when=move || ui.get().filter_open>
            <FilterPanel filters=filters on_close=close_filters />
        </Show>

        <Show when=move || ui.get().settings_open>
            <div class="panel-backdrop" on:click=toggle_settings></div>
            <aside class="settings-panel">
                <header class="settings-panel__header">
                    <h2>"Settings"</h2>
                    <button class="btn" on:click=toggle_settings aria-label="Close">
                        "✕"
                    </button>
                </header>
                <p class="settings-panel__empty">"No settings available yet."</p>
            </aside>
        </Show>
    }
}
