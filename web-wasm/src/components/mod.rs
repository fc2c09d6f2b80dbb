//! UI components

pub mod error_banner;
pub mod footer;
pub mod header;
pub mod process_panel;
pub mod results_panel;
pub mod upload_area;
