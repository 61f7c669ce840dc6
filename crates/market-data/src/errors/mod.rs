//! Error types for market data operations.

use thiserror::Error;

/// Errors that can occur while fetching market data.
///
/// Every fetch is a single attempt: none of these are retried internally,
/// they surface straight to the caller.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider has no usable data for the symbol or session: the symbol
    /// is unknown upstream, or a required price field is absent from the
    /// response.
    #[error("no data for {symbol}: {reason}")]
    DataUnavailable {
        /// The symbol the fetch was for
        symbol: String,
        /// What exactly was missing
        reason: String,
    },

    /// Network, timeout or rate-limit condition. The same request may succeed
    /// later; this process does not try again.
    #[error("transient failure fetching {symbol}: {message}")]
    TransientFetch {
        /// The symbol the fetch was for
        symbol: String,
        /// The underlying condition
        message: String,
    },

    /// The provider returned a price that is not a usable number
    /// (non-finite or negative).
    #[error("invalid price for {symbol}: {message}")]
    InvalidNumericInput {
        /// The symbol the fetch was for
        symbol: String,
        /// Which field failed validation and how
        message: String,
    },

    /// The provider itself could not be constructed; nothing was fetched.
    #[error("provider initialization failed: {message}")]
    InitFailed {
        /// What went wrong during construction
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::DataUnavailable {
            symbol: "XLNX".to_string(),
            reason: "symbol unknown to Yahoo".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "no data for XLNX: symbol unknown to Yahoo"
        );

        let error = MarketDataError::TransientFetch {
            symbol: "NVDA".to_string(),
            message: "rate limited by Yahoo".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "transient failure fetching NVDA: rate limited by Yahoo"
        );

        let error = MarketDataError::InvalidNumericInput {
            symbol: "IONQ".to_string(),
            message: "open price -1 is not a usable quote".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "invalid price for IONQ: open price -1 is not a usable quote"
        );
    }
}
