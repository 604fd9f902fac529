//! Catalog-specific error body

use serde::Deserialize;

/// Error body returned by the catalog API on non-success responses.
///
/// The catalog answers failed requests with a small JSON object, for example
/// when paging past the deepest page it is willing to serve:
///
/// ```json
/// { "status": 403, "error": "Invalid number of results", "detail": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticErrorDetail {
    /// HTTP status echoed in the body.
    pub status: u16,
    /// Short error title.
    pub error: String,
    /// Human-readable explanation.
    #[serde(default)]
    pub detail: String,
}

impl ArticErrorDetail {
    /// Creates a new error detail.
    pub fn new(status: u16, error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            detail: detail.into(),
        }
    }

    /// Attempts to parse an error body, returning `None` for anything else.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

impl std::fmt::Display for ArticErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.error, self.detail)
    }
}
