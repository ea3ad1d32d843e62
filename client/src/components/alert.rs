//! Toast notifications with a particle dismiss effect.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AlertStack` is mounted once by the app shell and renders
//! `RwSignal<AlertsState>` from context. Each `AlertCard` owns the two timers
//! that age its alert, so unmounting the card (or the stack) cancels them.

use leptos::prelude::*;

use crate::state::alerts::{
    ALERT_VISIBLE_MS, AlertKind, AlertPhase, AlertsState, DISINTEGRATE_MS, Particle, scatter_particles,
};
use crate::util::timer::TimerScope;

/// Queue an alert on the shared stack.
pub fn push_alert(alerts: RwSignal<AlertsState>, kind: AlertKind, message: impl Into<String>) {
    let message = message.into();
    alerts.update(|s| {
        s.push(kind, message);
    });
}

/// Fixed-position stack of live alerts.
#[component]
pub fn AlertStack() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertsState>>();

    view! {
        <div class="alert-stack" aria-live="polite">
            <For
                each=move || alerts.get().items
                key=|alert| alert.id.clone()
                children=move |alert| {
                    view! { <AlertCard id=alert.id kind=alert.kind message=alert.message /> }
                }
            />
        </div>
    }
}

#[component]
fn AlertCard(id: String, kind: AlertKind, message: String) -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertsState>>();
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let scope = TimerScope::install();

    {
        let id = id.clone();
        let scope_inner = scope.clone();
        scope.timeout(ALERT_VISIBLE_MS, move || {
            let particles = measure_particles(card_ref);
            alerts.update(|s| {
                s.begin_dismiss(&id, particles);
            });
            scope_inner.timeout(DISINTEGRATE_MS, move || alerts.update(|s| s.remove(&id)));
        });
    }

    let phase_id = id.clone();
    let disintegrating = move || {
        alerts.with(|s| s.items.iter().any(|a| a.id == phase_id && a.phase == AlertPhase::Disintegrating))
    };
    let particles_id = id;
    let particles = move || {
        alerts.with(|s| {
            s.items.iter().find(|a| a.id == particles_id).map(|a| a.particles.clone()).unwrap_or_default()
        })
    };

    view! {
        <div
            class=format!("alert {}", kind.css_class())
            class:alert--disintegrating=disintegrating
            node_ref=card_ref
            role="alert"
        >
            <span class="alert__icon" aria-hidden="true">{kind.icon()}</span>
            <span class="alert__message">{message}</span>
            {move || {
                particles()
                    .into_iter()
                    .map(|p| {
                        let style = format!(
                            "left:{:.1}px;top:{:.1}px;animation-delay:{:.2}s",
                            p.x,
                            p.y,
                            p.delay_secs,
                        );
                        view! { <span class="alert__particle" style=style></span> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn measure_particles(card_ref: NodeRef<leptos::html::Div>) -> Vec<Particle> {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = card_ref.get_untracked() else {
            return Vec::new();
        };
        let rect = el.get_bounding_client_rect();
        scatter_particles(rect.width(), rect.height(), js_sys::Math::random)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = card_ref;
        scatter_particles(0.0, 0.0, || 0.0)
    }
}
