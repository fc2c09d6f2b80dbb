//! Main application component
//!
//! Holds the single upload/review [`Session`] in one signal and wires the
//! event handlers around it. Every visible panel is a pure projection of
//! that session; the handlers are the only writers.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use docprocessor_common::{
    connection_error, decode_response, is_supported_file, project, to_pretty_json, ApiConfig,
    Error, FileSource, PendingFile, Session, EXPORT_FILE_NAME, FILE_READ_FAILED_MESSAGE,
};

use crate::api::detect;
use crate::components::{
    error_banner::ErrorBanner, footer::Footer, header::Header, process_panel::ProcessPanel,
    results_panel::ResultsPanel, upload_area::UploadArea,
};
use crate::export::download;

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let config = StoredValue::new(ApiConfig::from_build_env());

    // File acquisition: validate before touching the bytes, then read them
    // and store the candidate. Rejections go through the session so the
    // picker/drop asymmetry stays in one place.
    let on_file = move |file: web_sys::File, source: FileSource| {
        let name = file.name();
        let mime_type = file.type_();
        if !is_supported_file(&mime_type, &name) {
            session.update(|s| s.reject_candidate(source));
            return;
        }
        spawn_local(async move {
            let file = gloo::file::File::from(file);
            match gloo::file::futures::read_as_bytes(&file).await {
                Ok(bytes) => session.update(|s| {
                    s.offer_file(
                        PendingFile {
                            name,
                            mime_type,
                            bytes,
                        },
                        source,
                    );
                }),
                Err(_) => session.update(|s| s.fail(FILE_READ_FAILED_MESSAGE)),
            }
        });
    };

    // Submission: begin_submit hands out the file only when none is in
    // flight, so a second click while Submitting is a no-op even before the
    // disabled attribute kicks in.
    let on_submit = move |_| {
        let Some(file) = session.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let config = config.get_value();
        spawn_local(async move {
            let outcome = detect::submit_detection(&config, &file).await;
            session.update(|s| match outcome {
                Ok(body) => match decode_response(&body) {
                    Ok(report) => s.submit_succeeded(report),
                    Err(Error::Detection(message)) => s.submit_failed(message),
                    Err(err) => s.submit_failed(connection_error(err)),
                },
                Err(err) => {
                    s.submit_failed(connection_error(detect::describe_js_error(&err)))
                }
            });
        });
    };

    let on_export = move |_| {
        match session.with(|s| s.report().map(to_pretty_json)) {
            Some(Ok(json)) => {
                if let Err(err) = download::save_json(&json, EXPORT_FILE_NAME) {
                    gloo::console::error!("export failed:", err);
                }
            }
            Some(Err(err)) => gloo::console::error!("export failed:", err.to_string()),
            // No result held: the control is disabled, nothing to do.
            None => {}
        }
    };

    let on_reset = move |_| session.update(|s| s.reset());

    let can_export = Signal::derive(move || session.with(|s| s.has_result()));
    let show_upload = move || session.with(|s| s.pending_file().is_none());
    let show_process = move || session.with(|s| s.pending_file().is_some() && !s.has_result());
    let file_name =
        Signal::derive(move || session.with(|s| s.file_name().unwrap_or_default().to_string()));
    let submitting = Signal::derive(move || session.with(|s| s.is_submitting()));
    let error_message = move || session.with(|s| s.error_message().map(str::to_string));
    let result_view = Memo::new(move |_| {
        session.with(|s| s.report().map(|report| project(&report.result, &config.get_value())))
    });

    view! {
        <div class="page">
            <Header can_export=can_export on_export=on_export />

            <main class="container">
                <Show when=show_upload>
                    <UploadArea on_file=on_file />
                </Show>

                <Show when=show_process>
                    <ProcessPanel file_name=file_name submitting=submitting on_submit=on_submit />
                </Show>

                {move || error_message().map(|message| view! { <ErrorBanner message=message /> })}

                {move || {
                    result_view
                        .get()
                        .map(|result| view! { <ResultsPanel result=result on_reset=on_reset /> })
                }}
            </main>

            <Footer />
        </div>
    }
}
