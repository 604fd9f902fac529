//! Row selection across pages
//!
//! - [`SelectionSet`] - Per-id selected flags, independent of the page shown
//! - [`PendingTarget`] - A validated "how many rows" request
//! - [`CrossPageSelector`] - Selects or deselects the next N rows across pages

mod selector;
mod set;
mod target;

pub use selector::Accumulation;
pub use selector::CrossPageSelector;
pub use selector::ExhaustReason;
pub use selector::Outcome;
pub use set::SelectionSet;
pub use target::PendingTarget;
