//! Detection API wire types and response decoding
//!
//! The endpoint answers with one of two success shapes, discriminated by
//! `file_type == "pdf"`:
//!
//! - single image: `{ success, result_image_url?, counts: {...} }`
//! - document: `{ success, file_type: "pdf", pages: [...], total_counts: {...} }`
//!
//! and on failure `{ success: false, error?: string }`. Decoding is
//! defensive: every count defaults to zero and image references are
//! optional throughout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Banner message when the server reports a failure without an error string.
pub const DETECTION_FAILED_MESSAGE: &str = "Detection failed";

/// Occurrence counts for the fixed detection categories.
///
/// `stamps` is the wire name; the UI labels it "Seals".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    #[serde(default)]
    pub signatures: u32,
    #[serde(default)]
    pub stamps: u32,
    #[serde(default)]
    pub qr_codes: u32,
}

impl CategoryCounts {
    /// Display rows in fixed order, with the UI-facing category labels.
    pub fn labelled(&self) -> [(&'static str, u32); 3] {
        [
            ("Signatures", self.signatures),
            ("Seals", self.stamps),
            ("QR Codes", self.qr_codes),
        ]
    }
}

/// One page of a processed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub page: u32,
    #[serde(default)]
    pub result_image_url: Option<String>,
}

/// Parsed success payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionResult {
    /// A single uploaded image.
    Image {
        result_image_url: Option<String>,
        counts: CategoryCounts,
    },
    /// A multi-page document, pages in server order.
    Document {
        pages: Vec<PageResult>,
        total_counts: CategoryCounts,
    },
}

/// A successful detection response: the typed view used for rendering plus
/// the raw payload, kept verbatim so the JSON export mirrors the server
/// response exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReport {
    pub raw: Value,
    pub result: DetectionResult,
}

#[derive(Deserialize)]
struct WireResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    file_type: Option<String>,
    #[serde(default)]
    pages: Option<Vec<PageResult>>,
    #[serde(default)]
    total_counts: Option<CategoryCounts>,
    #[serde(default)]
    result_image_url: Option<String>,
    #[serde(default)]
    counts: Option<CategoryCounts>,
}

/// Decodes a detection response body.
///
/// Returns [`Error::Json`] when the body is not valid JSON (or lacks the
/// `success` field) and [`Error::Detection`] when the server reports
/// `success: false`; an empty `error` string falls back to the generic
/// message, matching how the original page treated it.
pub fn decode_response(body: &str) -> Result<DetectionReport> {
    let raw: Value = serde_json::from_str(body)?;
    let wire: WireResponse = serde_json::from_value(raw.clone())?;

    if !wire.success {
        let message = wire
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DETECTION_FAILED_MESSAGE.to_string());
        return Err(Error::Detection(message));
    }

    let result = if wire.file_type.as_deref() == Some("pdf") {
        DetectionResult::Document {
            pages: wire.pages.unwrap_or_default(),
            total_counts: wire.total_counts.unwrap_or_default(),
        }
    } else {
        DetectionResult::Image {
            result_image_url: wire.result_image_url,
            counts: wire.counts.unwrap_or_default(),
        }
    };

    Ok(DetectionReport { raw, result })
}
