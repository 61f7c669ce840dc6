use basketdrift_market_data::MarketDataError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for core operations.
///
/// Provider failures are wrapped per stage so a report error always names
/// both the symbol and whether it died on the fund leg or a holding leg.
#[derive(Error, Debug)]
pub enum Error {
    /// The identifier is not part of the holdings table.
    #[error("identifier not tracked in holdings table: {0}")]
    UnknownIdentifier(String),

    /// The fund's own quote could not be fetched.
    #[error("fund quote fetch failed for {symbol}: {source}")]
    FundFetch {
        symbol: String,
        #[source]
        source: MarketDataError,
    },

    /// A holding's quote could not be fetched.
    #[error("holding quote fetch failed for {symbol}: {source}")]
    HoldingFetch {
        symbol: String,
        #[source]
        source: MarketDataError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_stage_and_symbol() {
        let err = Error::HoldingFetch {
            symbol: "NVDA".to_string(),
            source: MarketDataError::TransientFetch {
                symbol: "NVDA".to_string(),
                message: "connection reset".to_string(),
            },
        };
        let text = err.to_string();
        assert!(text.contains("holding quote fetch failed"));
        assert!(text.contains("NVDA"));
        assert!(text.contains("connection reset"));
    }

    #[test]
    fn test_unknown_identifier_display() {
        let err = Error::UnknownIdentifier("ZZZ".to_string());
        assert_eq!(
            err.to_string(),
            "identifier not tracked in holdings table: ZZZ"
        );
    }
}
