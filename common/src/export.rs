//! JSON export of the last successful response

use crate::error::Result;
use crate::types::DetectionReport;

/// Name of the downloaded artifact.
pub const EXPORT_FILE_NAME: &str = "detection_results.json";

/// Serializes the held report for download. The raw payload is exported, so
/// the artifact mirrors the server response exactly (pretty-printed), fields
/// the client does not model included.
pub fn to_pretty_json(report: &DetectionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report.raw)?)
}
