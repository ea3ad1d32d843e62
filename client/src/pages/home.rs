//! Public marketing homepage.

use leptos::prelude::*;

const NAV_ITEMS: [&str; 5] = ["Features", "Dashboard", "Test", "Pricing", "Contact"];

const FEATURES: [(&str, &str); 6] = [
    (
        "Seamless Upload",
        "Drag & drop K6 transcripts or paste JSON directly. Our intelligent parser handles multiple formats automatically with zero configuration required.",
    ),
    (
        "Advanced Visualization",
        "Interactive charts with drill-down capabilities, real-time filtering, and customizable dashboards that reveal hidden performance patterns.",
    ),
    (
        "Smart Comparisons",
        "AI-powered test comparison engine that identifies performance regressions, improvements, and anomalies across test runs automatically.",
    ),
    (
        "Collaborative Editing",
        "Team-friendly annotation system with threaded comments, performance targets, and shared insights for better cross-team collaboration.",
    ),
    (
        "Intelligent Management",
        "Auto-organize test runs with smart tagging, archival policies, and cleanup workflows that keep your workspace pristine and efficient.",
    ),
    (
        "Enterprise Security",
        "Bank-grade encryption, SOC 2 compliance, and granular access controls ensure your performance data stays secure and private.",
    ),
];

const STEPS: [(&str, &str); 4] = [
    ("Upload & Import", "Seamlessly upload your K6 test results with our intelligent parser that handles any format"),
    ("Auto-Processing", "Our AI-powered engine automatically extracts, validates, and structures your performance data"),
    (
        "Interactive Analytics",
        "Explore beautiful, interactive visualizations with drill-down capabilities and real-time insights",
    ),
    (
        "Team Collaboration",
        "Share findings, add annotations, and collaborate with your team to drive performance improvements",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <div class="home-page">
            <nav class="home-nav">
                <a class="home-nav__brand" href="/">"Calf"</a>
                <div class="home-nav__links" class:home-nav__links--open=move || menu_open.get()>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <a class="home-nav__link" href="#">{*item}</a> })
                        .collect_view()}
                    <a class="btn" href="/login">"Sign In"</a>
                    <a class="btn btn--primary" href="/login">"Get Started"</a>
                </div>
                <button
                    class="btn home-nav__menu"
                    aria-label="Menu"
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            <section class="home-hero">
                <span class="home-hero__badge">"Performance Testing Made Simple"</span>
                <h1>
                    "Visualize & Analyze Your "
                    <span class="home-hero__accent">"K6 Performance Tests"</span>
                </h1>
                <p class="home-hero__lead">
                    "Transform your K6 test results into beautiful, interactive dashboards. Upload, analyze, and compare performance data with enterprise-grade visualization tools designed for modern engineering teams."
                </p>
                <div class="home-hero__actions">
                    <a class="btn btn--primary" href="/login">"Start Testing"</a>
                    <a class="btn" href="#features">"View Demo"</a>
                </div>
            </section>

            <section class="home-features" id="features">
                {FEATURES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <article class="home-card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="home-steps">
                <h2>"Transform Data into " <span class="home-hero__accent">"Actionable Insights"</span></h2>
                <p>"Four simple steps to unlock the full potential of your performance testing data"</p>
                <ol class="home-steps__list">
                    {STEPS
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <li class="home-steps__item">
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <footer class="home-footer">
                <span>"© Calf"</span>
            </footer>
        </div>
    }
}
