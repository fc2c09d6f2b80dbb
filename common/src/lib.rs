//! DocProcessor Common Library
//!
//! Types and logic shared by the web frontend: detection wire format,
//! upload/review session state machine, result projection, and export.
//! Everything here is platform-independent and tested natively.

pub mod config;
pub mod error;
pub mod export;
pub mod render;
pub mod state;
pub mod types;

pub use config::{ApiConfig, DEFAULT_API_ORIGIN};
pub use error::{Error, Result};
pub use export::{to_pretty_json, EXPORT_FILE_NAME};
pub use render::{project, ResultBlock, ResultView, Summary};
pub use state::{
    connection_error, is_supported_file, FileSource, PendingFile, Session, UiState,
    FILE_READ_FAILED_MESSAGE, INVALID_FILE_MESSAGE,
};
pub use types::{
    decode_response, CategoryCounts, DetectionReport, DetectionResult, PageResult,
    DETECTION_FAILED_MESSAGE,
};
