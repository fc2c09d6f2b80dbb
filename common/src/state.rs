//! Upload/review session state machine
//!
//! One [`UiState`] variant holds at any time, alongside a single
//! [`PendingFile`] slot. Both are mutated only through the transition
//! methods on [`Session`], so the scattered flags of an ad-hoc UI (loading,
//! error, result) cannot desynchronize: a result exists only inside
//! `Succeeded`, an error message only inside `Failed`.

use crate::types::DetectionReport;

/// Banner message for an unsupported file type.
pub const INVALID_FILE_MESSAGE: &str = "Please select a valid file (JPEG, PNG, PDF)";

/// Banner message when the accepted file's bytes could not be read.
pub const FILE_READ_FAILED_MESSAGE: &str = "Failed to read file";

/// Prefix for transport and parse failures, kept consistent across causes.
pub const CONNECTION_ERROR_PREFIX: &str = "Connection error: ";

/// MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "application/pdf",
];

/// Formats a transport/parse failure for the banner.
pub fn connection_error(detail: impl std::fmt::Display) -> String {
    format!("{}{}", CONNECTION_ERROR_PREFIX, detail)
}

/// Checks a candidate against the allow-list. PDFs sometimes arrive with an
/// unreliable MIME type, so a case-insensitive `.pdf` extension check is a
/// required fallback.
pub fn is_supported_file(mime_type: &str, file_name: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type) || file_name.to_lowercase().ends_with(".pdf")
}

/// The selected, not-yet-submitted artifact. Bytes are read up front so the
/// session holds no browser handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Where a candidate file came from. A rejected picker selection clears the
/// pending slot while a rejected drop leaves it untouched; the asymmetry is
/// deliberate (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
}

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    FileSelected,
    Submitting,
    Succeeded(DetectionReport),
    Failed(String),
}

/// One upload/review session: the tagged state plus the single pending-file
/// slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    file: Option<PendingFile>,
    state: UiState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate file. On acceptance the candidate becomes the
    /// pending file and any previous result or error is discarded; on
    /// rejection the invalid-file message is set and the pending slot is
    /// handled per [`FileSource`]. Returns whether the candidate was
    /// accepted.
    pub fn offer_file(&mut self, file: PendingFile, source: FileSource) -> bool {
        if !is_supported_file(&file.mime_type, &file.name) {
            self.reject_candidate(source);
            return false;
        }
        self.file = Some(file);
        self.state = UiState::FileSelected;
        true
    }

    /// Records a rejected candidate without touching an accepted one
    /// (except on picker rejection, which clears the slot).
    pub fn reject_candidate(&mut self, source: FileSource) {
        if source == FileSource::Picker {
            self.file = None;
        }
        self.state = UiState::Failed(INVALID_FILE_MESSAGE.to_string());
    }

    /// Surfaces a failure outside the submit path (e.g. the file bytes could
    /// not be read). The pending slot is left as is.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = UiState::Failed(message.into());
    }

    /// Starts a submission, returning the file to upload. A no-op (returns
    /// `None`) when no file is pending or a request is already in flight;
    /// this is the sole concurrency guard.
    pub fn begin_submit(&mut self) -> Option<PendingFile> {
        if matches!(self.state, UiState::Submitting) {
            return None;
        }
        let file = self.file.clone()?;
        self.state = UiState::Submitting;
        Some(file)
    }

    pub fn submit_succeeded(&mut self, report: DetectionReport) {
        self.state = UiState::Succeeded(report);
    }

    /// Records a failed submission. The file stays selected so the user can
    /// retry.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.state = UiState::Failed(message.into());
    }

    /// Full reset back to the initial state: no file, no result, no error.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn pending_file(&self) -> Option<&PendingFile> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    pub fn report(&self) -> Option<&DetectionReport> {
        match &self.state {
            UiState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UiState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, UiState::Submitting)
    }

    pub fn has_result(&self) -> bool {
        matches!(self.state, UiState::Succeeded(_))
    }
}
