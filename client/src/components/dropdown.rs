//! Select dropdown and three-dots action menu.
//!
//! DESIGN
//! ======
//! Option filtering, selection toggling and the trigger label are pure
//! helpers; the components only hold open/search signals. Clicking outside an
//! open menu lands on a transparent overlay that closes it.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use leptos::prelude::*;

/// One selectable entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub disabled: bool,
    /// Rendered in the destructive style (three-dots menu only).
    pub danger: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into(), ..Self::default() }
    }

    #[must_use]
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Options whose label or value contains `term`, case-insensitively.
pub fn filter_options(options: &[DropdownOption], term: &str) -> Vec<DropdownOption> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle) || o.value.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Multi-select: add `value` if absent, remove it if present.
pub fn toggle_value(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|v| v == value) {
        selected.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_owned());
        next
    }
}

/// Trigger label: the placeholder, the single selected label, or "N selected".
pub fn display_text(options: &[DropdownOption], selected: &[String], placeholder: &str) -> String {
    match selected {
        [] => placeholder.to_owned(),
        [one] => options.iter().find(|o| &o.value == one).map_or_else(|| one.clone(), |o| o.label.clone()),
        many => format!("{} selected", many.len()),
    }
}

pub fn empty_message(term: &str) -> &'static str {
    if term.trim().is_empty() { "No options available" } else { "No results found" }
}

/// Single- or multi-select dropdown bound to `selected`.
#[component]
pub fn Dropdown(
    options: Vec<DropdownOption>,
    selected: RwSignal<Vec<String>>,
    #[prop(into, default = "Select an option".to_owned())] placeholder: String,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] on_change: Option<Callback<Vec<String>>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let term = RwSignal::new(String::new());
    let options = StoredValue::new(options);

    let close = move || {
        open.set(false);
        term.set(String::new());
    };

    let select = move |value: String| {
        let next = if multiple { toggle_value(&selected.get_untracked(), &value) } else { vec![value] };
        selected.set(next.clone());
        if let Some(cb) = on_change {
            cb.run(next);
        }
        if !multiple {
            close();
        }
    };

    let label = move || options.with_value(|opts| display_text(opts, &selected.get(), &placeholder));

    view! {
        <div class="dropdown" class:dropdown--open=move || open.get()>
            <button
                type="button"
                class="dropdown__trigger"
                disabled=disabled
                on:click=move |_| {
                    if !disabled {
                        open.update(|o| *o = !*o);
                    }
                }
            >
                <span class="dropdown__label">{label}</span>
                <span class="dropdown__chevron" aria-hidden="true">"▾"</span>
            </button>
            <Show when=move || open.get()>
                <div class="dropdown__overlay" on:click=move |_| close()></div>
                <div class="dropdown__menu">
                    <Show when=move || searchable>
                        <input
                            class="dropdown__search"
                            type="text"
                            placeholder="Search..."
                            prop:value=move || term.get()
                            on:input=move |ev| term.set(event_target_value(&ev))
                        />
                    </Show>
                    {move || {
                        let visible = options.with_value(|opts| filter_options(opts, &term.get()));
                        if visible.is_empty() {
                            return view! { <div class="dropdown__empty">{empty_message(&term.get())}</div> }
                                .into_any();
                        }
                        visible
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                let check = option.value.clone();
                                let is_selected = move || selected.get().contains(&check);
                                view! {
                                    <button
                                        type="button"
                                        class="dropdown__option"
                                        class:dropdown__option--selected=is_selected
                                        disabled=option.disabled
                                        on:click=move |_| select(value.clone())
                                    >
                                        <span class="dropdown__option-label">{option.label}</span>
                                        {option
                                            .description
                                            .map(|d| view! { <span class="dropdown__option-desc">{d}</span> })}
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Kebab-button action menu. Selecting an enabled option runs `on_select`
/// with its value and closes the menu.
#[component]
pub fn ThreeDotsDropdown(
    options: Vec<DropdownOption>,
    on_select: Callback<String>,
    #[prop(into, default = Signal::stored(false))] emphasized: Signal<bool>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="kebab" class:kebab--emphasized=move || emphasized.get()>
            <button
                type="button"
                class="kebab__button"
                aria-label="More options"
                on:click=move |ev| {
                    ev.stop_propagation();
                    open.update(|o| *o = !*o);
                }
            >
                "⋮"
            </button>
            <Show when=move || open.get()>
                <div class="dropdown__overlay" on:click=move |_| open.set(false)></div>
                <div class="kebab__menu">
                    {options
                        .clone()
                        .into_iter()
                        .map(|option| {
                            let value = option.value.clone();
                            view! {
                                <button
                                    type="button"
                                    class="kebab__option"
                                    class:kebab__option--danger=option.danger
                                    disabled=option.disabled
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        open.set(false);
                                        on_select.run(value.clone());
                                    }
                                >
                                    {option.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
