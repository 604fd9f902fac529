//! Grid state
//!
//! [`Grid`] holds what a paginated multi-select table needs between user
//! actions: the page on screen, the catalog total for the paginator, the
//! selection across all pages, and the small "select N rows" panel.
//! Rendering is left to the host.

use log::debug;

use crate::api::PAGE_LIMIT;
use crate::api::PageFetcher;
use crate::api::PageNumber;
use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::ArtworkId;
use crate::selection::Accumulation;
use crate::selection::CrossPageSelector;
use crate::selection::SelectionSet;

/// State of a paginated, multi-select artwork grid.
///
/// # Example
///
/// ```ignore
/// let mut grid = Grid::new(ArticClient::builder().build()?);
/// grid.load(PageNumber::FIRST).await?;
///
/// grid.set_pending_input("15");
/// grid.submit_pending(true).await;
///
/// assert_eq!(grid.selection().selected_count(), 15);
/// ```
pub struct Grid<F> {
    fetcher: F,
    page: PageNumber,
    records: Vec<Artwork>,
    total_records: usize,
    loading: bool,
    selection: SelectionSet,
    pending_input: String,
    panel_open: bool,
}

impl<F: PageFetcher> Grid<F> {
    /// Creates an empty grid positioned on the first page.
    ///
    /// Nothing is fetched until [`load`](Self::load) is called.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            page: PageNumber::FIRST,
            records: Vec::new(),
            total_records: 0,
            loading: false,
            selection: SelectionSet::new(),
            pending_input: String::new(),
            panel_open: false,
        }
    }

    /// Moves to `page` and fetches its rows.
    ///
    /// On failure the grid keeps the rows it showed before, stops loading,
    /// and returns the error. There is no retry.
    pub async fn load(&mut self, page: PageNumber) -> Result<(), FetchError> {
        self.page = page;
        self.loading = true;

        let result = self.fetcher.fetch(page).await;
        self.loading = false;

        let fetched = result?;
        self.total_records = fetched.total_count();
        self.records = fetched.into_records();
        Ok(())
    }

    /// Fetches the current page again.
    pub async fn reload(&mut self) -> Result<(), FetchError> {
        self.load(self.page).await
    }

    /// Moves to the next page if the paginator has one.
    ///
    /// Returns `Ok(false)` without fetching when already on the last page.
    pub async fn next_page(&mut self) -> Result<bool, FetchError> {
        if self.page.get() as usize >= self.page_count() {
            return Ok(false);
        }
        self.load(self.page.next()).await?;
        Ok(true)
    }

    /// Moves to the previous page.
    ///
    /// Returns `Ok(false)` without fetching when already on the first page.
    pub async fn prev_page(&mut self) -> Result<bool, FetchError> {
        let Some(prev) = self.page.prev() else {
            return Ok(false);
        };
        self.load(prev).await?;
        Ok(true)
    }

    /// Runs the pending "select N rows" request.
    ///
    /// Rows are taken from the current page first, then from the pages after
    /// it. On success the input is cleared and the panel closed. Input that
    /// is not a positive integer is ignored and leaves everything, including
    /// the panel, as it was.
    ///
    /// The walk starts after [`page`](Self::page), which already points at
    /// the requested page when a [`load`](Self::load) failed. In that state
    /// the rows on screen belong to the previous page and the requested page
    /// is skipped; [`reload`](Self::reload) first to avoid that.
    pub async fn submit_pending(&mut self, select: bool) -> Option<Accumulation> {
        let selector = CrossPageSelector::new(&self.fetcher);
        let result = selector
            .accumulate_and_flag(
                &self.pending_input,
                &self.records,
                self.page.next(),
                select,
                &mut self.selection,
            )
            .await;

        match result {
            Ok(accumulation) => {
                self.pending_input.clear();
                self.panel_open = false;
                Some(accumulation)
            }
            Err(e) => {
                debug!("Ignoring selection request: {}", e);
                None
            }
        }
    }
}

impl<F> Grid<F> {
    /// Returns the page on screen.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Returns the rows on screen, in server order.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Returns the catalog-wide record count from the last successful load.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Returns the number of pages the paginator shows.
    pub fn page_count(&self) -> usize {
        self.total_records.div_ceil(PAGE_LIMIT)
    }

    /// Zero-based index of the first row on screen.
    pub fn first_row_offset(&self) -> usize {
        self.page.offset()
    }

    /// Returns `true` while a page load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the selection across all pages.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns `true` if the row is selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selection.is_selected(id)
    }

    /// Returns the selected rows on screen.
    pub fn visible_selection(&self) -> Vec<&Artwork> {
        self.records
            .iter()
            .filter(|a| self.selection.is_selected(a.id))
            .collect()
    }

    /// Applies a selection change made directly on the table.
    ///
    /// `selected` is the full set of ticked rows on the current page. Rows on
    /// other pages keep their flags.
    pub fn sync_page_selection(&mut self, selected: &[ArtworkId]) {
        let visible = self.records.iter().map(|a| a.id);
        self.selection.sync_page(visible, selected);
    }

    /// Flips one row on the current page.
    ///
    /// Returns the new flag, or `None` if the row is not on screen.
    pub fn toggle_row(&mut self, id: ArtworkId) -> Option<bool> {
        if !self.records.iter().any(|a| a.id == id) {
            return None;
        }
        Some(self.selection.toggle(id))
    }

    /// Opens or closes the "select N rows" panel.
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    /// Returns `true` if the "select N rows" panel is open.
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Replaces the text typed into the panel.
    pub fn set_pending_input(&mut self, input: impl Into<String>) {
        self.pending_input = input.into();
    }

    /// Returns the text typed into the panel.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::MemoryCatalog;

    fn ids(raw: &[u64]) -> Vec<ArtworkId> {
        raw.iter().copied().map(ArtworkId::new).collect()
    }

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_load_sets_page_state() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12, 4]));
        grid.load(page(2)).await.unwrap();

        assert_eq!(grid.page(), page(2));
        assert_eq!(grid.records().len(), 12);
        assert_eq!(grid.records()[0].id, ArtworkId::new(13));
        assert_eq!(grid.total_records(), 28);
        assert_eq!(grid.page_count(), 3);
        assert_eq!(grid.first_row_offset(), 12);
        assert!(!grid.is_loading());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_stale_rows() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12]).fail_on(2));
        grid.load(PageNumber::FIRST).await.unwrap();

        let err = grid.load(page(2)).await.unwrap_err();
        assert_eq!(err.page, page(2));
        assert!(!grid.is_loading());
        assert_eq!(grid.records()[0].id, ArtworkId::new(1));
        assert_eq!(grid.total_records(), 24);
    }

    #[tokio::test]
    async fn test_paging_bounds() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 3]));
        grid.load(PageNumber::FIRST).await.unwrap();

        assert!(!grid.prev_page().await.unwrap());
        assert!(grid.next_page().await.unwrap());
        assert_eq!(grid.page(), page(2));
        assert!(!grid.next_page().await.unwrap());
        assert!(grid.prev_page().await.unwrap());
        assert_eq!(grid.page(), PageNumber::FIRST);
    }

    #[tokio::test]
    async fn test_selection_survives_navigation() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12]));
        grid.load(PageNumber::FIRST).await.unwrap();
        grid.sync_page_selection(&ids(&[1, 2]));

        grid.next_page().await.unwrap();
        assert!(grid.visible_selection().is_empty());
        grid.sync_page_selection(&ids(&[13]));

        grid.prev_page().await.unwrap();
        let visible: Vec<ArtworkId> = grid.visible_selection().iter().map(|a| a.id).collect();
        assert_eq!(visible, ids(&[1, 2]));
        assert_eq!(grid.selection().selected_ids(), ids(&[1, 2, 13]));
    }

    #[tokio::test]
    async fn test_toggle_row_only_on_screen() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12]));
        grid.load(PageNumber::FIRST).await.unwrap();

        assert_eq!(grid.toggle_row(ArtworkId::new(4)), Some(true));
        assert_eq!(grid.toggle_row(ArtworkId::new(20)), None);
        assert!(!grid.selection().contains(ArtworkId::new(20)));
    }

    #[tokio::test]
    async fn test_submit_pending_selects_from_current_page() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12, 12]));
        grid.load(page(2)).await.unwrap();
        grid.toggle_panel();
        grid.set_pending_input("15");

        let accumulation = grid.submit_pending(true).await.unwrap();

        assert!(accumulation.is_satisfied());
        assert_eq!(grid.selection().selected_ids().first(), Some(&ArtworkId::new(13)));
        assert_eq!(grid.selection().selected_ids().last(), Some(&ArtworkId::new(27)));
        assert_eq!(grid.pending_input(), "");
        assert!(!grid.is_panel_open());
    }

    #[tokio::test]
    async fn test_submit_after_failed_load_starts_past_requested_page() {
        let catalog = MemoryCatalog::with_page_sizes(&[12, 12, 12]).fail_on(2);
        let mut grid = Grid::new(catalog);
        grid.load(PageNumber::FIRST).await.unwrap();
        assert!(grid.next_page().await.is_err());

        assert_eq!(grid.page(), page(2));
        assert_eq!(grid.records()[0].id, ArtworkId::new(1));

        grid.set_pending_input("14");
        grid.submit_pending(true).await.unwrap();

        // Stale page 1 rows, then page 3: page 2 is never asked for again.
        let selected = grid.selection().selected_ids();
        assert_eq!(selected[..12], ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])[..]);
        assert_eq!(selected[12..], ids(&[25, 26])[..]);
    }

    #[tokio::test]
    async fn test_first_load_failure_leaves_no_pages() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12]).fail_on(1));
        assert!(grid.load(PageNumber::FIRST).await.is_err());

        assert_eq!(grid.page_count(), 0);
        assert!(!grid.next_page().await.unwrap());
    }

    #[tokio::test]
    async fn test_submit_invalid_input_changes_nothing() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12]));
        grid.load(PageNumber::FIRST).await.unwrap();
        grid.toggle_panel();
        grid.set_pending_input("lots");

        assert!(grid.submit_pending(true).await.is_none());
        assert_eq!(grid.pending_input(), "lots");
        assert!(grid.is_panel_open());
        assert!(grid.selection().is_empty());
    }

    #[tokio::test]
    async fn test_submit_deselect() {
        let mut grid = Grid::new(MemoryCatalog::with_page_sizes(&[12, 12]));
        grid.load(PageNumber::FIRST).await.unwrap();
        grid.sync_page_selection(&ids(&[1, 2, 3, 12]));

        grid.set_pending_input("2");
        grid.submit_pending(false).await.unwrap();

        assert_eq!(grid.selection().selected_ids(), ids(&[3, 12]));
    }
}
