//! PageFetcher trait

use async_trait::async_trait;

use crate::ArticClient;
use crate::error::FetchError;

use super::Page;
use super::PageNumber;

/// Source of catalog pages.
///
/// Callers only choose the page number; the page size is fixed at
/// [`PAGE_LIMIT`](super::PAGE_LIMIT). Implementations must not cache: every
/// call reflects the source at the time of the call.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one page.
    async fn fetch(&self, page: PageNumber) -> Result<Page, FetchError>;
}

#[async_trait]
impl PageFetcher for ArticClient {
    async fn fetch(&self, page: PageNumber) -> Result<Page, FetchError> {
        self.fetch_page(page).await
    }
}
