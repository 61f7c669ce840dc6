use basketdrift_market_data::PriceQuote;

/// Intraday movement of one quote: reference price minus session open.
///
/// While markets are closed the reference price is the previous close, so
/// the value reads as "how far the last session drifted from this open".
/// Positive means the reference sits above the open. The result is an
/// absolute amount in the quote's currency, not a percentage.
pub fn movement(quote: &PriceQuote) -> f64 {
    quote.reference - quote.open
}

/// Movement scaled by the holding's fraction of the fund.
pub fn weighted_movement(quote: &PriceQuote, weight: f64) -> f64 {
    movement(quote) * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(open: f64, reference: f64) -> PriceQuote {
        PriceQuote::new("TEST", open, reference, "USD")
    }

    #[test]
    fn test_movement_is_reference_minus_open() {
        assert_eq!(movement(&quote(100.0, 102.0)), 2.0);
    }

    #[test]
    fn test_movement_negative_when_reference_below_open() {
        assert_eq!(movement(&quote(50.0, 49.0)), -1.0);
    }

    #[test]
    fn test_weighted_movement_scales_linearly() {
        let q = quote(100.0, 102.0);
        assert_eq!(weighted_movement(&q, 0.5), 1.0);
        assert_eq!(weighted_movement(&q, 0.25), 2.0 * 0.25);
        // Doubling the weight doubles the contribution.
        assert_eq!(weighted_movement(&q, 0.5), 2.0 * weighted_movement(&q, 0.25));
    }
}
