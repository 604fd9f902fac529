//! Page fetch error

use crate::api::PageNumber;

use super::ApiError;

/// A single page could not be fetched.
///
/// Carries the page number that was attempted so callers can report or log
/// where a walk across pages stopped.
#[derive(Debug, thiserror::Error)]
#[error("Failed to fetch page {page}: {source}")]
pub struct FetchError {
    /// The page that was requested.
    pub page: PageNumber,
    /// The underlying API failure.
    #[source]
    pub source: ApiError,
}

impl FetchError {
    /// Creates a new fetch error for the given page.
    pub fn new(page: PageNumber, source: impl Into<ApiError>) -> Self {
        Self {
            page,
            source: source.into(),
        }
    }
}
