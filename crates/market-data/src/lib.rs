//! Basketdrift market data crate.
//!
//! Provider-facing half of the tracker. The [`MarketDataProvider`] trait is
//! the seam the core consumes; [`YahooProvider`] implements it over Yahoo
//! Finance and returns [`PriceQuote`] session models.
//!
//! A provider answers one question per symbol: what was the current session's
//! opening price, and what is the reference price (the previous session's
//! close, which stands in for the live price while markets are closed). Each
//! fetch is a single attempt; retry policy belongs to callers.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::PriceQuote;
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
