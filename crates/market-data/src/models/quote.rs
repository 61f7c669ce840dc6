use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One instrument's session prices, fetched fresh on each run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Exchange-qualified ticker the quote belongs to.
    pub symbol: String,

    /// Opening price of the current session.
    pub open: f64,

    /// Reference price: the previous session's close. Stands in for the live
    /// price when markets are closed.
    pub reference: f64,

    /// Quote currency as reported by the provider. Prices stay in the
    /// instrument's native currency; nothing downstream converts them.
    pub currency: String,

    /// When this process fetched the quote.
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    /// Create a quote stamped with the current time.
    pub fn new(
        symbol: impl Into<String>,
        open: f64,
        reference: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            open,
            reference,
            currency: currency.into(),
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_new() {
        let quote = PriceQuote::new("QTUM", 58.10, 58.45, "USD");
        assert_eq!(quote.symbol, "QTUM");
        assert_eq!(quote.open, 58.10);
        assert_eq!(quote.reference, 58.45);
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let quote = PriceQuote::new("AIR.PA", 110.0, 111.5, "EUR");
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["symbol"], "AIR.PA");
        assert_eq!(json["open"], 110.0);
        assert_eq!(json["reference"], 111.5);
        assert!(json.get("fetchedAt").is_some());
    }
}
