//! Error types

mod api;
mod artic;
mod fetch;
mod target;

pub use api::*;
pub use artic::*;
pub use fetch::*;
pub use target::*;
