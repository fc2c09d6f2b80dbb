//! Browser download of a JSON document
//!
//! Wraps the serialized result in a Blob, points a synthetic anchor at a
//! temporary object URL and clicks it. The object URL is revoked right
//! after the click is triggered, whether or not anything failed in between,
//! so repeated exports do not leak blob handles.

use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Saves `json` as a client-side download named `file_name`.
pub fn save_json(json: &str, file_name: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(json));

    let props = BlobPropertyBag::new();
    props.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let result = click_anchor(&url, file_name);
    let _ = Url::revoke_object_url(&url);
    result
}

fn click_anchor(url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
