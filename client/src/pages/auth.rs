//! Login, registration and OTP verification page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/login` renders one of three forms driven by `AuthStep`. Each submit runs
//! the matching `AuthForm` gate first; a failed gate or a failed backend call
//! raises an error alert and leaves the step where it was.
//!
//! A successful login stores the token through `Session` (local storage and
//! cookie), confirms, then navigates to `/app` after a short delay.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert::push_alert;
use crate::state::alerts::{AlertKind, AlertsState};
use crate::state::auth::{
    AuthEvent, AuthForm, AuthState, AuthStep, LOGIN_REDIRECT_DELAY_MS, REGISTER_REDIRECT_DELAY_MS,
};
use crate::util::timer::TimerScope;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Welcome to Calf.";
pub const OTP_SENT_MESSAGE: &str = "OTP sent to your email successfully! Please check your inbox.";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";
pub const GOOGLE_FAILED_MESSAGE: &str = "Failed to initialize Google authentication. Please try again.";

/// Submit-button caption for `step`, switching to a progress label while busy.
pub fn submit_label(step: AuthStep, busy: bool) -> &'static str {
    match (step, busy) {
        (AuthStep::Login, false) => "Sign In",
        (AuthStep::Login, true) => "Signing In...",
        (AuthStep::Register, false) => "Send OTP",
        (AuthStep::Register, true) => "Sending OTP...",
        (AuthStep::OtpPending, false) => "Verify & Create Account",
        (AuthStep::OtpPending, true) => "Verifying...",
    }
}

pub fn step_subtitle(step: AuthStep, email: &str) -> String {
    match step {
        AuthStep::Login => "Sign in to continue your journey".to_owned(),
        AuthStep::Register => "Join us and start testing".to_owned(),
        AuthStep::OtpPending => format!("Enter the OTP sent to {email}"),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let alerts = expect_context::<RwSignal<AlertsState>>();
    let navigate = use_navigate();
    let scope = TimerScope::install();

    let step = RwSignal::new(AuthStep::default());
    let form = RwSignal::new(AuthForm::default());
    let busy = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    let fail = move |message: String| {
        busy.set(false);
        push_alert(alerts, AlertKind::Error, message);
    };

    let on_login = {
        let scope = scope.clone();
        let navigate = navigate.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let req = match form.get_untracked().login_request() {
                Ok(req) => req,
                Err(e) => return fail(e.to_string()),
            };
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let scope = scope.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&req).await {
                        Ok(resp) => {
                            crate::util::session::browser_session().save(&resp.token);
                            auth.update(|a| {
                                a.authenticated = true;
                                a.loading = false;
                            });
                            crate::util::auth::fetch_user(auth);
                            push_alert(alerts, AlertKind::Success, LOGIN_SUCCESS_MESSAGE);
                            busy.set(false);
                            scope.timeout(LOGIN_REDIRECT_DELAY_MS, move || {
                                navigate("/app", NavigateOptions::default());
                            });
                        }
                        Err(e) => {
                            log::warn!("login failed: {e}");
                            fail(e.to_string());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (req, &scope, &navigate, auth);
        })
    };

    let on_send_otp = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = match form.get_untracked().send_otp_request() {
            Ok(req) => req,
            Err(e) => return fail(e.to_string()),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_otp(&req).await {
                Ok(()) => {
                    busy.set(false);
                    push_alert(alerts, AlertKind::Success, OTP_SENT_MESSAGE);
                    step.update(|s| *s = s.next(AuthEvent::OtpSent));
                }
                Err(e) => {
                    log::warn!("send otp failed: {e}");
                    fail(e.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = req;
    });

    let on_register = {
        let scope = scope.clone();
        Callback::new(move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let req = match form.get_untracked().register_request() {
                Ok(req) => req,
                Err(e) => return fail(e.to_string()),
            };
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let scope = scope.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::register(&req).await {
                        Ok(resp) => {
                            if let Some(token) = resp.session_token() {
                                crate::util::session::browser_session().save(token);
                            }
                            push_alert(alerts, AlertKind::Success, REGISTER_SUCCESS_MESSAGE);
                            scope.timeout(REGISTER_REDIRECT_DELAY_MS, move || {
                                busy.set(false);
                                form.set(AuthForm::default());
                                step.update(|s| *s = s.next(AuthEvent::Registered));
                            });
                        }
                        Err(e) => {
                            log::warn!("register failed: {e}");
                            fail(e.to_string());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (req, &scope);
        })
    };

    let on_google = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let url = crate::net::api::google_auth_url();
            let redirected = web_sys::window().is_some_and(|w| w.location().set_href(&url).is_ok());
            if !redirected {
                push_alert(alerts, AlertKind::Error, GOOGLE_FAILED_MESSAGE);
            }
        }
    };

    let go = move |event: AuthEvent| {
        if !busy.get_untracked() {
            step.update(|s| *s = s.next(event));
        }
    };

    let is_step = move |target: AuthStep| step.get() == target;
    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <section class="auth-page__welcome">
                <h1>"Welcome to " <span class="auth-page__brand">"Calf"</span></h1>
                <p>"Visualize, compare and share your K6 performance test results."</p>
            </section>

            <section class="auth-card">
                <h2>{move || step.get().title()}</h2>
                <p class="auth-card__subtitle">{move || step_subtitle(step.get(), &form.get().email)}</p>

                <Show when=move || is_step(AuthStep::Login)>
                    <form class="auth-form" on:submit=move |ev| on_login.run(ev)>
                        <EmailInput form=form />
                        <PasswordInput form=form show=show_password input_type=Signal::derive(password_type) />
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get() || form.get().login_disabled()
                        >
                            {move || submit_label(AuthStep::Login, busy.get())}
                        </button>
                    </form>
                    <div class="auth-card__divider">"or"</div>
                    <button class="btn auth-card__google" type="button" on:click=on_google>
                        "Continue with Google"
                    </button>
                    <p class="auth-card__switch">
                        "Don't have an account? "
                        <button class="link" type="button" on:click=move |_| go(AuthEvent::ShowRegister)>
                            "Sign up"
                        </button>
                    </p>
                </Show>

                <Show when=move || is_step(AuthStep::Register)>
                    <form class="auth-form" on:submit=move |ev| on_send_otp.run(ev)>
                        <input
                            class="auth-form__input"
                            type="text"
                            name="name"
                            placeholder="Full name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <EmailInput form=form />
                        <PasswordInput form=form show=show_password input_type=Signal::derive(password_type) />
                        <ul class="auth-form__rules">
                            {move || {
                                let f = form.get();
                                if f.password.is_empty() {
                                    return Vec::new();
                                }
                                f.password_errors()
                                    .into_iter()
                                    .map(|rule| view! { <li class="auth-form__rule">{rule.message()}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get() || form.get().send_otp_disabled()
                        >
                            {move || submit_label(AuthStep::Register, busy.get())}
                        </button>
                    </form>
                    <p class="auth-card__switch">
                        "Already have an account? "
                        <button class="link" type="button" on:click=move |_| go(AuthEvent::ShowLogin)>
                            "Sign in"
                        </button>
                    </p>
                </Show>

                <Show when=move || is_step(AuthStep::OtpPending)>
                    <button class="link auth-card__back" type="button" on:click=move |_| go(AuthEvent::Back)>
                        "← Back"
                    </button>
                    <form class="auth-form" on:submit=move |ev| on_register.run(ev)>
                        <input
                            class="auth-form__input auth-form__input--otp"
                            type="text"
                            name="otp"
                            inputmode="numeric"
                            maxlength="6"
                            placeholder="Enter 6-digit OTP"
                            prop:value=move || form.get().otp
                            on:input=move |ev| form.update(|f| f.otp = event_target_value(&ev))
                        />
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get() || form.get().otp.is_empty()
                        >
                            {move || submit_label(AuthStep::OtpPending, busy.get())}
                        </button>
                    </form>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn EmailInput(form: RwSignal<AuthForm>) -> impl IntoView {
    view! {
        <input
            class="auth-form__input"
            type="email"
            name="email"
            placeholder="Email address"
            prop:value=move || form.get().email
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
        />
    }
}

#[component]
fn PasswordInput(form: RwSignal<AuthForm>, show: RwSignal<bool>, input_type: Signal<&'static str>) -> impl IntoView {
    view! {
        <div class="auth-form__password">
            <input
                class="auth-form__input"
                type=move || input_type.get()
                name="password"
                placeholder="Password"
                prop:value=move || form.get().password
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
            <button
                class="auth-form__reveal"
                type="button"
                aria-label="Toggle password visibility"
                on:click=move |_| show.update(|s| *s = !*s)
            >
                {move || if show.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
