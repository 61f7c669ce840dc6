//! Yahoo Finance provider.
//!
//! Quotes come from two upstream shapes. The primary path reads the daily
//! bar history (latest bar's open, prior bar's close). When it fails, the
//! provider falls back to the quoteSummary `price` module, which carries the
//! same two figures as regularMarketOpen and regularMarketPreviousClose.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use reqwest::{header, StatusCode};
use time::OffsetDateTime;
use tracing::debug;
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::PriceQuote;
use crate::provider::MarketDataProvider;

use models::QuoteSummaryResponse;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Days of daily history requested per symbol. The window must span at
/// least two completed sessions, weekends and holidays included.
const LOOKBACK_DAYS: i64 = 7;

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Market data provider backed by Yahoo Finance.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::InitFailed {
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self { connector })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self, symbol: &str) -> Result<CrumbData, MarketDataError> {
        // Check if we have a cached crumb
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        // Fetch new crumb
        self.fetch_crumb(symbol).await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self, symbol: &str) -> Result<CrumbData, MarketDataError> {
        let client = reqwest::Client::new();

        // Step 1: Get cookie from fc.yahoo.com
        let response = client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: format!("Failed to get cookie: {}", e),
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: format!("Failed to get crumb: {}", e),
            })?
            .text()
            .await
            .map_err(|e| MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: format!("Failed to read crumb: {}", e),
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        // Cache it
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // Quote Fetching
    // ========================================================================

    /// Primary path: derive the session quote from the two most recent
    /// daily bars.
    async fn fetch_from_daily_bars(&self, symbol: &str) -> Result<PriceQuote, MarketDataError> {
        let end = Utc::now();
        let start = end - Duration::days(LOOKBACK_DAYS);

        let response = self
            .connector
            .get_quote_history(symbol, to_offset_datetime(start), to_offset_datetime(end))
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::DataUnavailable {
                        symbol: symbol.to_string(),
                        reason: "symbol unknown to Yahoo".to_string(),
                    }
                } else {
                    MarketDataError::TransientFetch {
                        symbol: symbol.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let currency = response
            .metadata()
            .ok()
            .and_then(|meta| meta.currency)
            .unwrap_or_else(|| "USD".to_string());

        let bars = response
            .quotes()
            .map_err(|e| MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("no usable daily bars: {}", e),
            })?;

        if bars.len() < 2 {
            return Err(MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("{} daily bar(s) in lookback window, need 2", bars.len()),
            });
        }

        // Bars arrive in ascending order. The last one is the current
        // session, the one before it supplies the previous close.
        let latest = &bars[bars.len() - 1];
        let previous = &bars[bars.len() - 2];
        validated_quote(symbol, latest.open, previous.close, currency)
    }

    /// Fallback path: read regularMarketOpen and regularMarketPreviousClose
    /// from the quoteSummary price module. Requires a crumb.
    async fn fetch_from_quote_summary(
        &self,
        symbol: &str,
    ) -> Result<PriceQuote, MarketDataError> {
        let crumb_data = self.ensure_crumb(symbol).await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price&crumb={}",
            encode(symbol),
            encode(&crumb_data.crumb)
        );

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::COOKIE, &crumb_data.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: format!("quoteSummary request failed: {}", e),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // Expired crumbs answer 401. Drop the cache so the next call
            // re-authenticates.
            self.clear_crumb();
            return Err(MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: "Yahoo session expired, crumb cache cleared".to_string(),
            });
        }
        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "symbol unknown to Yahoo".to_string(),
            });
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: "rate limited by Yahoo".to_string(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::TransientFetch {
                symbol: symbol.to_string(),
                message: format!("quoteSummary returned HTTP {}", status),
            });
        }

        let parsed: QuoteSummaryResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::TransientFetch {
                    symbol: symbol.to_string(),
                    message: format!("quoteSummary response unreadable: {}", e),
                })?;

        let price = parsed
            .quote_summary
            .result
            .first()
            .and_then(|r| r.price.as_ref())
            .ok_or_else(|| MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "no price module in quoteSummary response".to_string(),
            })?;

        let open = price
            .regular_market_open
            .as_ref()
            .and_then(|d| d.raw)
            .ok_or_else(|| MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "regularMarketOpen absent".to_string(),
            })?;

        let reference = price
            .regular_market_previous_close
            .as_ref()
            .and_then(|d| d.raw)
            .ok_or_else(|| MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "regularMarketPreviousClose absent".to_string(),
            })?;

        let currency = price
            .currency
            .clone()
            .unwrap_or_else(|| "USD".to_string());

        validated_quote(symbol, open, reference, currency)
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<PriceQuote, MarketDataError> {
        debug!("Fetching session quote from Yahoo for {}", symbol);
        let quote = match self.fetch_from_daily_bars(symbol).await {
            Ok(quote) => quote,
            Err(e) => {
                debug!(
                    "Daily-bar fetch failed for {}: {}. Trying quoteSummary",
                    symbol, e
                );
                self.fetch_from_quote_summary(symbol).await?
            }
        };
        debug!("Fetched quote for {} priced in {}", quote.symbol, quote.currency);
        Ok(quote)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a [`PriceQuote`] after checking both prices are usable numbers.
fn validated_quote(
    symbol: &str,
    open: f64,
    reference: f64,
    currency: String,
) -> Result<PriceQuote, MarketDataError> {
    for (field, value) in [("open", open), ("reference", reference)] {
        if !value.is_finite() || value < 0.0 {
            return Err(MarketDataError::InvalidNumericInput {
                symbol: symbol.to_string(),
                message: format!("{} price {} is not a usable quote", field, value),
            });
        }
    }
    Ok(PriceQuote::new(symbol, open, reference, currency))
}

/// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
fn to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(dt.timestamp())
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_quote_accepts_regular_prices() {
        let quote = validated_quote("MSFT", 101.5, 100.0, "USD".to_string()).unwrap();
        assert_eq!(quote.symbol, "MSFT");
        assert_eq!(quote.open, 101.5);
        assert_eq!(quote.reference, 100.0);
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn test_validated_quote_rejects_negative_price() {
        let err = validated_quote("MSFT", -1.0, 100.0, "USD".to_string()).unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidNumericInput { .. }));
    }

    #[test]
    fn test_validated_quote_rejects_nan_price() {
        let err = validated_quote("MSFT", 101.5, f64::NAN, "USD".to_string()).unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidNumericInput { .. }));
    }

    #[tokio::test]
    async fn test_cached_crumb_is_reused_and_cleared() {
        let provider = YahooProvider::new().unwrap();

        {
            let mut guard = YAHOO_CRUMB.write().unwrap();
            *guard = Some(CrumbData {
                cookie: "A3=d=AQABBObQ".to_string(),
                crumb: "nx0WAfbHLdQ".to_string(),
            });
        }

        // A cache hit must come back as seeded; a refetch would return
        // something else or fail offline.
        let crumb_data = provider.ensure_crumb("QTUM").await.unwrap();
        assert_eq!(crumb_data.cookie, "A3=d=AQABBObQ");
        assert_eq!(crumb_data.crumb, "nx0WAfbHLdQ");

        provider.clear_crumb();
        assert!(YAHOO_CRUMB.read().unwrap().is_none());
    }
}
