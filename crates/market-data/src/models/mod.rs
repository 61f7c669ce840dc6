//! Data models shared across providers.

mod quote;

pub use quote::PriceQuote;
