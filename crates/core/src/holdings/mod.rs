//! Holdings table module - fund composition and weight lookups.

mod holdings_model;
mod qtum;

pub use holdings_model::*;
pub use qtum::*;
