//! Upload area component
//!
//! Accepts a file through the picker button or drag-and-drop onto the zone.
//! Validation and byte reading live with the caller; this component only
//! hands over the raw `web_sys::File` and where it came from.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

use docprocessor_common::FileSource;

/// Mirrors the allow-list; the picker still lets anything through on some
/// platforms, so acceptance is decided by the caller either way.
const PICKER_ACCEPT: &str = ".jpg,.jpeg,.png,.pdf,image/*,application/pdf";

#[component]
pub fn UploadArea<F>(on_file: F) -> impl IntoView
where
    F: Fn(web_sys::File, FileSource) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file, FileSource::Drop);
            }
        }
    };

    // prevent_default is required on dragover too, or the browser opens the
    // file instead of delivering the drop.
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_file = on_file.clone();
        move |_| open_file_picker(on_file.clone())
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <button class="btn btn-primary" on:click=on_click>
                "Upload File"
            </button>
            <p class="text-muted">"or drag and drop file anywhere"</p>
            <p class="text-muted">"Supported formats: JPEG, PNG, PDF"</p>
        </div>
    }
}

/// Opens a file dialog through a detached `<input type=file>`.
fn open_file_picker<F>(on_file: F)
where
    F: Fn(web_sys::File, FileSource) + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(input) = document
        .create_element("input")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().map_err(JsValue::from))
    else {
        return;
    };
    input.set_type("file");
    input.set_accept(PICKER_ACCEPT);

    let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file, FileSource::Picker);
        }
    }) as Box<dyn FnMut(_)>);

    input.set_onchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    input.click();
}
