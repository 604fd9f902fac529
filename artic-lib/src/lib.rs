//! Art Institute of Chicago catalog client
//!
//! A Rust async client for the public artwork catalog API, with the
//! selection bookkeeping needed to drive a paginated multi-select grid:
//! a per-id [`selection::SelectionSet`] that survives page navigation and a
//! [`selection::CrossPageSelector`] that selects the next N rows across pages.

pub mod api;
pub mod error;
pub mod model;
pub mod selection;

mod client;
mod grid;

pub use client::*;
pub use grid::Grid;
