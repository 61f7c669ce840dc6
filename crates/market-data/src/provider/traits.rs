//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceQuote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source. A
/// provider performs exactly one upstream attempt per
/// [`fetch_quote`](Self::fetch_quote) call and surfaces failure immediately;
/// callers that want retry policy layer it on themselves.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the session quote for one exchange-qualified symbol.
    ///
    /// # Errors
    ///
    /// [`MarketDataError::DataUnavailable`] when the provider does not know
    /// the symbol or a required price field is absent,
    /// [`MarketDataError::TransientFetch`] on network or rate-limit
    /// conditions, and [`MarketDataError::InvalidNumericInput`] when a
    /// fetched price fails numeric validation.
    async fn fetch_quote(&self, symbol: &str) -> Result<PriceQuote, MarketDataError>;
}
