//! Catalog paging
//!
//! - [`Page`] - One page of artworks with the catalog total
//! - [`PageNumber`] - A 1-indexed page number
//! - [`PageFetcher`] - Anything that can produce a page by number
//! - [`ArtworkPages`] - Forward walk over consecutive pages

mod fetcher;
mod page;
mod pages;

#[cfg(test)]
pub(crate) mod fixtures;

pub use fetcher::PageFetcher;
pub use page::PAGE_LIMIT;
pub use page::Page;
pub use page::PageNumber;
pub use pages::ArtworkPages;
