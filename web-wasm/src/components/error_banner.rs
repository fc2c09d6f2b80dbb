//! Inline error banner
//!
//! Shown whenever an error message is set, independent of the other panels.
//! Dismissed by the next action (new file, retry, reset), not by a control
//! of its own.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner">{message}</div>
    }
}
