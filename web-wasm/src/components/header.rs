//! Header component

use leptos::prelude::*;

#[component]
pub fn Header<F>(can_export: Signal<bool>, on_export: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"DocProcessor"</h1>
            <button
                class="btn btn-header"
                disabled=move || !can_export.get()
                on:click={
                    let on_export = on_export.clone();
                    move |_| on_export(())
                }
            >
                "Download in JSON format"
            </button>
        </header>
    }
}
