//! Process panel component
//!
//! Shown while a file is pending and no result is held: the file name and
//! the submit control, disabled and relabeled for the duration of the
//! request.

use leptos::prelude::*;

#[component]
pub fn ProcessPanel<F>(
    file_name: Signal<String>,
    submitting: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="process-panel">
            <div class="file-name">{move || file_name.get()}</div>
            <button
                class="btn btn-process"
                disabled=move || submitting.get()
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                {move || if submitting.get() { "Processing..." } else { "Process" }}
            </button>
        </div>
    }
}
