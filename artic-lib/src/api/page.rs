//! Page type for paginated catalog results.

use std::fmt;
use std::num::NonZeroU32;

use crate::model::Artwork;

/// Number of artworks requested per page.
pub const PAGE_LIMIT: usize = 12;

/// A 1-indexed page number.
///
/// # Example
///
/// ```
/// use artic_lib::api::PageNumber;
///
/// let page = PageNumber::new(2).unwrap();
/// assert_eq!(page.next().get(), 3);
/// assert_eq!(page.offset(), 12);
/// assert!(PageNumber::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Creates a page number, returning `None` for zero.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Returns the raw page number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the following page, saturating at `u32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the following page, or `None` on overflow.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Returns the preceding page, or `None` on the first page.
    pub fn prev(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// Zero-based index of the first row on this page.
    pub fn offset(self) -> usize {
        (self.get() as usize - 1) * PAGE_LIMIT
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A page of artworks.
///
/// Each page holds the records the catalog returned for one page number, in
/// server order, along with the total number of artworks in the whole
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    number: PageNumber,
    records: Vec<Artwork>,
    total_count: usize,
}

impl Page {
    /// Creates a new page.
    pub fn new(number: PageNumber, records: Vec<Artwork>, total_count: usize) -> Self {
        Self {
            number,
            records,
            total_count,
        }
    }

    /// Returns the page number this page was fetched for.
    pub fn number(&self) -> PageNumber {
        self.number
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    /// Returns the catalog-wide record count.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the number of pages in the catalog at [`PAGE_LIMIT`] per page.
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(PAGE_LIMIT)
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_on_first_page() {
        assert_eq!(PageNumber::FIRST.prev(), None);
        assert_eq!(PageNumber::new(5).unwrap().prev(), PageNumber::new(4));
    }

    #[test]
    fn test_next_saturates() {
        let last = PageNumber::new(u32::MAX).unwrap();
        assert_eq!(last.next(), last);
        assert_eq!(last.checked_next(), None);
    }

    #[test]
    fn test_total_pages() {
        let page = Page::new(PageNumber::FIRST, Vec::new(), 25);
        assert_eq!(page.total_pages(), 3);

        let page = Page::new(PageNumber::FIRST, Vec::new(), 24);
        assert_eq!(page.total_pages(), 2);
    }
}
