//! Slide-in filter panel for the project workspace.
//!
//! Filters are local UI state only; applying them logs the selection and
//! closes the panel.

use leptos::prelude::*;

use crate::state::ui::{FilterState, OUTCOME_OPTIONS, STATUS_OPTIONS, TIME_SLIDER_MAX};

#[component]
pub fn FilterPanel(filters: RwSignal<FilterState>, on_close: Callback<()>) -> impl IntoView {
    let on_apply = move |_| {
        #[cfg(feature = "hydrate")]
        log::info!("applied filters: {:?}", filters.get_untracked());
        on_close.run(());
    };
    let on_clear = move |_| filters.update(FilterState::clear);

    view! {
        <div class="panel-backdrop" on:click=move |_| on_close.run(())></div>
        <aside class="filter-panel" on:click=move |ev| ev.stop_propagation()>
            <header class="filter-panel__header">
                <h2>"Filters"</h2>
                <button class="btn filter-panel__close" on:click=move |_| on_close.run(()) aria-label="Close">
                    "✕"
                </button>
            </header>

            <RadioGroup
                title="Check Status"
                name="status"
                options=&STATUS_OPTIONS
                selected=Signal::derive(move || filters.get().status)
                on_pick=Callback::new(move |v: String| filters.update(|f| f.status = Some(v)))
            />
            <RadioGroup
                title="Requested Outcome"
                name="requested-outcome"
                options=&OUTCOME_OPTIONS
                selected=Signal::derive(move || filters.get().requested_outcome)
                on_pick=Callback::new(move |v: String| filters.update(|f| f.requested_outcome = Some(v)))
            />

            <section class="filter-panel__section">
                <h3>"Time Settings"</h3>
                <TimeSlider
                    label="Average Time"
                    value=Signal::derive(move || filters.get().avg_time)
                    on_set=Callback::new(move |v| filters.update(|f| f.avg_time = v))
                />
                <TimeSlider
                    label="Minimum Time"
                    value=Signal::derive(move || filters.get().min_time)
                    on_set=Callback::new(move |v| filters.update(|f| f.min_time = v))
                />
                <TimeSlider
                    label="Maximum Time"
                    value=Signal::derive(move || filters.get().max_time)
                    on_set=Callback::new(move |v| filters.update(|f| f.max_time = v))
                />
                <TimeSlider
                    label="Median Time"
                    value=Signal::derive(move || filters.get().med_time)
                    on_set=Callback::new(move |v| filters.update(|f| f.med_time = v))
                />
            </section>

            <footer class="filter-panel__actions">
                <button class="btn btn--primary" on:click=on_apply>"Apply Filters"</button>
                <button class="btn" on:click=on_clear>"Clear All"</button>
                <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
            </footer>
        </aside>
    }
}

#[component]
fn RadioGroup(
    title: &'static str,
    name: &'static str,
    options: &'static [&'static str],
    selected: Signal<Option<String>>,
    on_pick: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="filter-panel__section">
            <h3>{title}</h3>
            {options
                .iter()
                .map(|&option| {
                    view! {
                        <label class="filter-panel__radio">
                            <input
                                type="radio"
                                name=name
                                value=option
                                prop:checked=move || selected.get().as_deref() == Some(option)
                                on:change=move |_| on_pick.run(option.to_owned())
                            />
                            <span>{option}</span>
                        </label>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn TimeSlider(label: &'static str, value: Signal<u32>, on_set: Callback<u32>) -> impl IntoView {
    view! {
        <label class="filter-panel__slider">
            <span class="filter-panel__slider-label">{label}": "{move || value.get()}"s"</span>
            <input
                type="range"
                min="0"
                max=TIME_SLIDER_MAX.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Some(v) = FilterState::clamp_time(&event_target_value(&ev)) {
                        on_set.run(v);
                    }
                }
            />
        </label>
    }
}
