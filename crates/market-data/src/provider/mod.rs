//! Market data provider abstraction and implementations.
//!
//! The [`MarketDataProvider`] trait is the seam between the report pipeline
//! and the outside world. Implementations receive plain exchange-qualified
//! symbols and perform exactly one upstream attempt per call.

mod traits;

pub mod yahoo;

pub use traits::MarketDataProvider;
