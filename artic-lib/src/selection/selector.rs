//! Cross-page selection
//!
//! Selecting "the next N rows" starts with the rows already on screen and
//! then walks forward through the catalog one page at a time until N ids
//! have been collected or the catalog runs out:
//!
//! ```text
//! Idle -> Validating -> Accumulating -> Satisfied | Exhausted -> Flagging -> Idle
//! ```
//!
//! There is no error state. An empty page and a failed fetch both end the
//! walk early, and whatever was collected up to that point is still flagged.

use log::debug;
use log::info;
use log::warn;

use super::PendingTarget;
use super::SelectionSet;
use crate::api::ArtworkPages;
use crate::api::PageFetcher;
use crate::api::PageNumber;
use crate::error::InvalidTarget;
use crate::model::Artwork;
use crate::model::ArtworkId;

/// How an accumulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly the requested number of ids were collected.
    Satisfied,
    /// The walk stopped before the target was reached.
    Exhausted {
        /// Why the walk stopped.
        reason: ExhaustReason,
    },
}

/// Why an accumulation stopped short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustReason {
    /// A page came back empty: the catalog has no more rows.
    EmptyPage,
    /// Fetching a page failed. The failure has been logged.
    FetchFailed {
        /// The page that could not be fetched.
        page: PageNumber,
    },
}

/// Result of collecting ids across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    ids: Vec<ArtworkId>,
    remaining: usize,
    pages_fetched: usize,
    outcome: Outcome,
}

impl Accumulation {
    /// Collected ids, in page order.
    pub fn ids(&self) -> &[ArtworkId] {
        &self.ids
    }

    /// Number of rows still missing when the walk stopped.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of page requests issued.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// How the walk ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns `true` if the full target was collected.
    pub fn is_satisfied(&self) -> bool {
        self.outcome == Outcome::Satisfied
    }
}

/// Selects or deselects a number of rows starting at the current page.
///
/// The selector never fetches pages in parallel: whether another page is
/// needed is only known once the previous one has arrived.
///
/// # Example
///
/// ```ignore
/// let selector = CrossPageSelector::new(&client);
/// let accumulation = selector
///     .accumulate_and_flag("15", &current_rows, page.next(), true, &mut selection)
///     .await?;
///
/// println!("selected {} rows", accumulation.ids().len());
/// ```
pub struct CrossPageSelector<'a, F: ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: PageFetcher + ?Sized> CrossPageSelector<'a, F> {
    /// Creates a selector that reads further pages from `fetcher`.
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Collects up to `target` ids without touching any selection.
    ///
    /// Rows are taken from the start of `current_page` first, then from
    /// `start_page`, `start_page + 1`, and so on.
    pub async fn accumulate(
        &self,
        target: PendingTarget,
        current_page: &[Artwork],
        start_page: PageNumber,
    ) -> Accumulation {
        let mut remaining = target.get();

        let take = remaining.min(current_page.len());
        let mut ids: Vec<ArtworkId> = current_page[..take].iter().map(|a| a.id).collect();
        remaining -= take;

        let mut pages = ArtworkPages::new(self.fetcher, start_page);
        let mut outcome = Outcome::Satisfied;

        while remaining > 0 {
            match pages.next().await {
                Some(Ok(page)) => {
                    let take = remaining.min(page.len());
                    ids.extend(page.records()[..take].iter().map(|a| a.id));
                    remaining -= take;
                }
                Some(Err(e)) => {
                    warn!(
                        "Failed fetching page {}, keeping {} collected rows: {}",
                        e.page,
                        ids.len(),
                        e.source
                    );
                    outcome = Outcome::Exhausted {
                        reason: ExhaustReason::FetchFailed { page: e.page },
                    };
                    break;
                }
                None => {
                    debug!("Catalog exhausted with {} rows still requested", remaining);
                    outcome = Outcome::Exhausted {
                        reason: ExhaustReason::EmptyPage,
                    };
                    break;
                }
            }
        }

        Accumulation {
            ids,
            remaining,
            pages_fetched: pages.pages_fetched(),
            outcome,
        }
    }

    /// Parses `input`, collects that many ids and flags them with `select`.
    ///
    /// Ids that were not collected keep their current flag. If `input` is
    /// not a positive integer nothing is fetched and `selection` is left as
    /// it was.
    pub async fn accumulate_and_flag(
        &self,
        input: &str,
        current_page: &[Artwork],
        start_page: PageNumber,
        select: bool,
        selection: &mut SelectionSet,
    ) -> Result<Accumulation, InvalidTarget> {
        let target = PendingTarget::parse(input)?;
        let accumulation = self.accumulate(target, current_page, start_page).await;

        selection.flag_all(accumulation.ids().iter().copied(), select);
        info!(
            "{} {} of {} requested rows across {} fetched pages",
            if select { "Selected" } else { "Deselected" },
            accumulation.ids().len(),
            target,
            accumulation.pages_fetched()
        );

        Ok(accumulation)
    }
}
