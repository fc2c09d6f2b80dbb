//! End-to-end session flow: select, submit, render, export, reset.

use docprocessor_common::{
    connection_error, decode_response, project, ApiConfig, Error, FileSource, PendingFile,
    Session, UiState, DETECTION_FAILED_MESSAGE, INVALID_FILE_MESSAGE,
};

fn pdf_file() -> PendingFile {
    PendingFile {
        name: "report.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.7".to_vec(),
    }
}

#[test]
fn document_flow_from_selection_to_export() {
    let config = ApiConfig::new("http://localhost:8000");
    let mut session = Session::new();

    assert!(session.offer_file(pdf_file(), FileSource::Drop));
    let upload = session.begin_submit().expect("submit should start");
    assert_eq!(upload.name, "report.pdf");
    assert!(session.is_submitting());

    let body = r#"{
        "success": true,
        "file_type": "pdf",
        "pages": [{ "page": 1 }, { "page": 2, "result_image_url": "/static/p2.png" }],
        "total_counts": { "stamps": 2 }
    }"#;
    session.submit_succeeded(decode_response(body).unwrap());

    let report = session.report().expect("result should be held");
    let view = project(&report.result, &config);
    assert_eq!(view.blocks.len(), 2);
    assert_eq!(view.blocks[0].title, "Page 1");
    assert_eq!(view.blocks[1].title, "Page 2");
    assert_eq!(
        view.blocks[1].image_url.as_deref(),
        Some("http://localhost:8000/static/p2.png")
    );
    assert_eq!(
        view.summary.counts.labelled(),
        [("Signatures", 0), ("Seals", 2), ("QR Codes", 0)]
    );

    let exported = docprocessor_common::to_pretty_json(report).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(reparsed, report.raw);

    session.reset();
    assert_eq!(session, Session::new());
}

#[test]
fn failed_submission_allows_retry_with_same_file() {
    let mut session = Session::new();
    session.offer_file(pdf_file(), FileSource::Picker);
    session.begin_submit().unwrap();

    // Transport failure: generic prefixed message, file kept.
    session.submit_failed(connection_error("Failed to fetch"));
    assert_eq!(
        session.error_message(),
        Some("Connection error: Failed to fetch")
    );
    assert_eq!(session.file_name(), Some("report.pdf"));

    // Retry hits an application error this time.
    session.begin_submit().unwrap();
    let err = decode_response(r#"{ "success": false, "error": "bad scan" }"#).unwrap_err();
    match err {
        Error::Detection(message) => session.submit_failed(message),
        other => session.submit_failed(connection_error(other)),
    }
    assert_eq!(session.error_message(), Some("bad scan"));

    // Server failure without a message falls back to the generic text.
    session.begin_submit().unwrap();
    match decode_response(r#"{ "success": false }"#).unwrap_err() {
        Error::Detection(message) => assert_eq!(message, DETECTION_FAILED_MESSAGE),
        other => panic!("expected detection error, got {:?}", other),
    }
}

#[test]
fn rejected_candidates_follow_source_asymmetry() {
    let mut session = Session::new();
    session.offer_file(pdf_file(), FileSource::Picker);

    let bad = PendingFile {
        name: "photo.webp".to_string(),
        mime_type: "image/webp".to_string(),
        bytes: vec![0],
    };

    // Drop rejection keeps the selection.
    assert!(!session.offer_file(bad.clone(), FileSource::Drop));
    assert_eq!(session.file_name(), Some("report.pdf"));
    assert_eq!(session.error_message(), Some(INVALID_FILE_MESSAGE));

    // Picker rejection clears it.
    assert!(!session.offer_file(bad, FileSource::Picker));
    assert!(session.pending_file().is_none());
    assert_eq!(session.error_message(), Some(INVALID_FILE_MESSAGE));
    assert_eq!(session.state(), &UiState::Failed(INVALID_FILE_MESSAGE.to_string()));
}

#[test]
fn unparsable_response_is_a_connection_error() {
    let mut session = Session::new();
    session.offer_file(pdf_file(), FileSource::Picker);
    session.begin_submit().unwrap();

    match decode_response("<html>gateway timeout</html>") {
        Err(Error::Detection(message)) => session.submit_failed(message),
        Err(other) => session.submit_failed(connection_error(other)),
        Ok(_) => panic!("expected a decode failure"),
    }

    let message = session.error_message().unwrap();
    assert!(message.starts_with("Connection error: "));
    assert_eq!(session.file_name(), Some("report.pdf"));
}
