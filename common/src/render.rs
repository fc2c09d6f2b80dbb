//! Result projection
//!
//! Pure mapping from a [`DetectionResult`] to the structure the results
//! panel displays: titled blocks in order, then one aggregate summary.

use crate::config::ApiConfig;
use crate::types::{CategoryCounts, DetectionResult};

/// One titled block, optionally carrying a resolved annotated-image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBlock {
    pub title: String,
    pub image_url: Option<String>,
}

/// The aggregate counts block shown after all result blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub heading: String,
    pub counts: CategoryCounts,
}

/// Everything the results panel renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub blocks: Vec<ResultBlock>,
    pub summary: Summary,
}

/// Projects a detection result into its view structure. Image references
/// are resolved against the API origin; a missing reference simply omits
/// the image slot.
pub fn project(result: &DetectionResult, config: &ApiConfig) -> ResultView {
    match result {
        DetectionResult::Image {
            result_image_url,
            counts,
        } => ResultView {
            blocks: vec![ResultBlock {
                title: "Detection Result".to_string(),
                image_url: result_image_url.as_deref().map(|p| config.resolve(p)),
            }],
            summary: Summary {
                heading: "Total Found in Image".to_string(),
                counts: *counts,
            },
        },
        DetectionResult::Document {
            pages,
            total_counts,
        } => ResultView {
            blocks: pages
                .iter()
                .map(|page| ResultBlock {
                    title: format!("Page {}", page.page),
                    image_url: page.result_image_url.as_deref().map(|p| config.resolve(p)),
                })
                .collect(),
            summary: Summary {
                heading: "Total Found in Document".to_string(),
                counts: *total_counts,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageResult;

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:8000")
    }

    #[test]
    fn test_project_single_image() {
        let result = DetectionResult::Image {
            result_image_url: Some("/static/result.png".to_string()),
            counts: CategoryCounts {
                signatures: 3,
                ..Default::default()
            },
        };

        let view = project(&result, &config());
        assert_eq!(view.blocks.len(), 1);
        assert_eq!(view.blocks[0].title, "Detection Result");
        assert_eq!(
            view.blocks[0].image_url.as_deref(),
            Some("http://localhost:8000/static/result.png")
        );
        assert_eq!(view.summary.heading, "Total Found in Image");
        assert_eq!(
            view.summary.counts.labelled(),
            [("Signatures", 3), ("Seals", 0), ("QR Codes", 0)]
        );
    }

    #[test]
    fn test_project_document_pages_in_order() {
        let result = DetectionResult::Document {
            pages: vec![
                PageResult {
                    page: 1,
                    result_image_url: None,
                },
                PageResult {
                    page: 2,
                    result_image_url: Some("/static/p2.png".to_string()),
                },
            ],
            total_counts: CategoryCounts {
                stamps: 2,
                ..Default::default()
            },
        };

        let view = project(&result, &config());
        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.blocks[0].title, "Page 1");
        assert_eq!(view.blocks[0].image_url, None);
        assert_eq!(view.blocks[1].title, "Page 2");
        assert_eq!(
            view.blocks[1].image_url.as_deref(),
            Some("http://localhost:8000/static/p2.png")
        );
        assert_eq!(view.summary.heading, "Total Found in Document");
        assert_eq!(
            view.summary.counts.labelled(),
            [("Signatures", 0), ("Seals", 2), ("QR Codes", 0)]
        );
    }

    #[test]
    fn test_project_missing_image_is_not_an_error() {
        let result = DetectionResult::Image {
            result_image_url: None,
            counts: CategoryCounts::default(),
        };
        let view = project(&result, &config());
        assert_eq!(view.blocks[0].image_url, None);
    }
}
