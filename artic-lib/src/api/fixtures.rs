//! In-memory page source for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::Page;
use super::PageFetcher;
use super::PageNumber;
use crate::error::ApiError;
use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::ArtworkId;

/// Catalog held in memory, numbered 1.. across pages.
///
/// Pages past the last configured one come back empty. Every request is
/// recorded so tests can assert on the fetch sequence.
pub(crate) struct MemoryCatalog {
    pages: Vec<Vec<Artwork>>,
    fail_on: Option<u32>,
    requested: Mutex<Vec<u32>>,
}

impl MemoryCatalog {
    /// Builds pages of the given sizes with ids assigned consecutively from 1.
    pub(crate) fn with_page_sizes(sizes: &[usize]) -> Self {
        let mut next_id = 1;
        let pages = sizes
            .iter()
            .map(|&size| {
                let page = (next_id..next_id + size as u64)
                    .map(|id| Artwork::new(ArtworkId::new(id)).title(format!("Artwork {}", id)))
                    .collect();
                next_id += size as u64;
                page
            })
            .collect();

        Self {
            pages,
            fail_on: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Makes requests for `page` fail.
    pub(crate) fn fail_on(mut self, page: u32) -> Self {
        self.fail_on = Some(page);
        self
    }

    /// Returns a configured page's records without recording a request.
    pub(crate) fn page(&self, page: u32) -> Vec<Artwork> {
        self.pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the page numbers requested so far, in order.
    pub(crate) fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }

    fn total(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

#[async_trait]
impl PageFetcher for MemoryCatalog {
    async fn fetch(&self, page: PageNumber) -> Result<Page, FetchError> {
        self.requested.lock().unwrap().push(page.get());

        if self.fail_on == Some(page.get()) {
            return Err(FetchError::new(page, ApiError::http(503, "Service Unavailable")));
        }

        Ok(Page::new(page, self.page(page.get()), self.total()))
    }
}
