//! Backend address configuration.

/// Address used when nothing was configured at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base address of the backend, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Builds a config from an optional configured value. Blank values fall
    /// back to [`DEFAULT_API_URL`]; trailing slashes are trimmed so paths can
    /// be appended directly.
    pub fn resolve(configured: Option<&str>) -> Self {
        let raw = configured
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self::new(raw)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path (starting with `/`) onto the base address.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
