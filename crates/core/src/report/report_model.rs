use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one comparison cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementReport {
    /// Symbol of the fund the holdings belong to.
    pub fund_symbol: String,
    /// The fund's own intraday movement.
    pub fund_movement: f64,
    /// Running-average fold over the per-holding weighted movements.
    pub weighted_average_movement: f64,
    /// How many holdings contributed to the average.
    pub holdings_count: usize,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_camel_case() {
        let report = MovementReport {
            fund_symbol: "QTUM".to_string(),
            fund_movement: 1.0,
            weighted_average_movement: 0.25,
            holdings_count: 2,
            generated_at: Utc::now(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["fundSymbol"], "QTUM");
        assert_eq!(value["holdingsCount"], 2);
        assert!(value.get("weightedAverageMovement").is_some());
        assert!(value.get("generatedAt").is_some());
    }
}
