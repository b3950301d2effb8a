//! Loading Component

use leptos::*;

/// Centered loading spinner for in-flight page data.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-wrap">
            <div class="loading-spinner"></div>
        </div>
    }
}
