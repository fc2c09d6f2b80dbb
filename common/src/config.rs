//! API origin configuration
//!
//! The detection service origin is injected at build time through the
//! `DOCPROCESSOR_API_ORIGIN` environment variable, e.g.
//!
//! ```sh
//! DOCPROCESSOR_API_ORIGIN=https://inspector.example.com trunk build --release
//! ```
//!
//! When the variable is unset the development default applies.

/// Origin used when `DOCPROCESSOR_API_ORIGIN` is not set at build time.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Detection service origin plus the URL derivations the app needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    /// Creates a config for the given origin. Trailing slashes are stripped
    /// so endpoint and image paths can be appended verbatim.
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// Reads the build-time override, falling back to [`DEFAULT_API_ORIGIN`].
    pub fn from_build_env() -> Self {
        Self::new(option_env!("DOCPROCESSOR_API_ORIGIN").unwrap_or(DEFAULT_API_ORIGIN))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Full URL of the detection endpoint.
    pub fn detect_endpoint(&self) -> String {
        format!("{}/api/detect/all", self.origin)
    }

    /// Resolves an annotated-image reference against the origin. Absolute
    /// references pass through unchanged.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.origin, path)
        } else {
            format!("{}/{}", self.origin, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
