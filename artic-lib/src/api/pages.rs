//! Async iterator over consecutive catalog pages.

use super::Page;
use super::PageFetcher;
use super::PageNumber;
use crate::error::FetchError;

/// Async iterator that yields consecutive pages starting at a given page.
///
/// Pages are requested strictly one after another. The walk ends at the
/// first empty page (which is not yielded) or after yielding the first
/// error.
///
/// # Example
///
/// ```ignore
/// let mut pages = ArtworkPages::new(&client, PageNumber::FIRST);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for artwork in page.records() {
///         println!("{}", artwork.id);
///     }
/// }
/// ```
pub struct ArtworkPages<'a, F: ?Sized> {
    /// Where pages come from.
    fetcher: &'a F,
    /// The next page to request, `None` once page numbers run out.
    next_page: Option<PageNumber>,
    /// Number of requests issued so far.
    fetched: usize,
    /// Whether the walk has ended.
    done: bool,
}

impl<'a, F: PageFetcher + ?Sized> ArtworkPages<'a, F> {
    /// Creates a walk starting at `start`.
    pub fn new(fetcher: &'a F, start: PageNumber) -> Self {
        Self {
            fetcher,
            next_page: Some(start),
            fetched: 0,
            done: false,
        }
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when the catalog is exhausted.
    pub async fn next(&mut self) -> Option<Result<Page, FetchError>> {
        if self.done {
            return None;
        }

        let Some(number) = self.next_page else {
            self.done = true;
            return None;
        };

        self.fetched += 1;
        match self.fetcher.fetch(number).await {
            Ok(page) if page.is_empty() => {
                self.done = true;
                None
            }
            Ok(page) => {
                self.next_page = number.checked_next();
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    /// Returns the number of pages requested so far, including an empty or
    /// failed final request.
    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }

    /// Returns `true` once the walk has ended.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::MemoryCatalog;

    #[tokio::test]
    async fn test_walk_stops_at_empty_page() {
        let catalog = MemoryCatalog::with_page_sizes(&[12, 12, 3]);
        let mut pages = ArtworkPages::new(&catalog, PageNumber::FIRST);

        let mut lens = Vec::new();
        while let Some(page) = pages.next().await {
            lens.push(page.unwrap().len());
        }

        assert_eq!(lens, vec![12, 12, 3]);
        assert_eq!(pages.pages_fetched(), 4);
        assert!(pages.is_done());
        assert_eq!(catalog.requested(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_walk_ends_after_error() {
        let catalog = MemoryCatalog::with_page_sizes(&[12, 12, 12]).fail_on(2);
        let mut pages = ArtworkPages::new(&catalog, PageNumber::FIRST);

        assert!(pages.next().await.unwrap().is_ok());
        let err = pages.next().await.unwrap().unwrap_err();
        assert_eq!(err.page.get(), 2);
        assert!(pages.next().await.is_none());
        assert_eq!(catalog.requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_walk_from_later_page() {
        let catalog = MemoryCatalog::with_page_sizes(&[12, 12, 5]);
        let mut pages = ArtworkPages::new(&catalog, PageNumber::new(3).unwrap());

        let page = pages.next().await.unwrap().unwrap();
        assert_eq!(page.number().get(), 3);
        assert_eq!(page.records()[0].id.get(), 25);
    }
}
