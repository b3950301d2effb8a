//! Page Header Component
//!
//! Top bar with the page title and an optional muted subtitle. Titles are
//! rendered as text nodes, so markup in user-sourced strings stays inert.

use leptos::*;

#[component]
pub fn PageHeader(
    /// Main page title
    #[prop(into)]
    title: String,
    /// Optional muted subtitle
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="topbar fade-in">
            <div class="page-title">
                <h1>{title}</h1>
                {subtitle.map(|text| view! {
                    <p class="text-muted">{text}</p>
                })}
            </div>
            <div class="topbar-actions">
                <button class="icon-btn">
                    <i class="fa-solid fa-bell"></i>
                </button>
            </div>
        </header>
    }
}
