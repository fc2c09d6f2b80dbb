//! Detection endpoint call
//!
//! One multipart POST per submission; the response body is returned as text
//! and decoded in `docprocessor-common`, so the raw payload stays available
//! for the JSON export.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

use docprocessor_common::{ApiConfig, PendingFile};

/// Field name the endpoint expects the file under.
const FILE_FIELD: &str = "file";

/// Submits the pending file and returns the raw response body.
///
/// Transport-level failures come back as `JsValue`; the caller maps them
/// into the connection-error banner message. The multipart boundary header
/// is set by the browser, so no Content-Type is attached here.
pub async fn submit_detection(config: &ApiConfig, file: &PendingFile) -> Result<String, JsValue> {
    let form = build_form(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&config.detect_endpoint(), &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("empty response body"))
}

/// Packages the pending file into a single-field multipart body, keeping the
/// declared MIME type and the original filename.
fn build_form(file: &PendingFile) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let props = BlobPropertyBag::new();
    props.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, &blob, &file.name)?;
    Ok(form)
}

/// Renders a `JsValue` error for the banner. Fetch rejections are usually
/// `TypeError` objects, not strings.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_build_form_carries_file_field() {
        let file = PendingFile {
            name: "scan.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let form = build_form(&file).expect("form construction failed");
        assert!(form.get(FILE_FIELD).is_instance_of::<Blob>());
    }

    #[wasm_bindgen_test]
    fn wasm_describe_js_error_prefers_string_then_message() {
        assert_eq!(describe_js_error(&JsValue::from_str("boom")), "boom");

        let err = js_sys::Error::new("fetch failed");
        assert_eq!(describe_js_error(&err.into()), "fetch failed");
    }
}
