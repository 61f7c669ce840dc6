use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One constituent of a fund: an exchange-qualified symbol and the fraction
/// of the fund it represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    /// Exchange-qualified ticker, e.g. "NVDA" or "6701.T".
    pub symbol: String,
    /// Portfolio weight as a fraction in (0, 1).
    pub weight: f64,
}

/// Immutable table of a fund's constituents.
///
/// Construction order is preserved: [`identifiers`](Self::identifiers) and
/// [`iter`](Self::iter) walk records in the order they were supplied, and
/// report output depends on that ordering.
#[derive(Debug, Clone)]
pub struct HoldingsTable {
    records: Vec<HoldingRecord>,
    index: HashMap<String, usize>,
}

impl HoldingsTable {
    /// Build a table from (symbol, weight) pairs.
    ///
    /// Debug builds assert that every weight sits in (0, 1) and that no
    /// symbol repeats.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, f64)>) -> Self {
        let mut records = Vec::new();
        let mut index = HashMap::new();
        for (symbol, weight) in entries {
            let symbol = symbol.into();
            debug_assert!(
                weight > 0.0 && weight < 1.0,
                "weight {weight} for {symbol} outside (0, 1)"
            );
            let previous = index.insert(symbol.clone(), records.len());
            debug_assert!(previous.is_none(), "duplicate holding {symbol}");
            records.push(HoldingRecord { symbol, weight });
        }
        Self { records, index }
    }

    /// Symbols in table order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.symbol.as_str())
    }

    /// Weight of one symbol.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownIdentifier`] when the symbol is not in the table.
    pub fn weight_of(&self, symbol: &str) -> Result<f64> {
        self.index
            .get(symbol)
            .map(|&position| self.records[position].weight)
            .ok_or_else(|| Error::UnknownIdentifier(symbol.to_string()))
    }

    /// Records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &HoldingRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HoldingsTable {
        HoldingsTable::new([("AAA", 0.5), ("BBB", 0.3), ("CCC", 0.2)])
    }

    #[test]
    fn test_identifiers_preserve_insertion_order() {
        let table = sample();
        let symbols: Vec<&str> = table.identifiers().collect();
        assert_eq!(symbols, vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn test_weight_of_known_symbol() {
        let table = sample();
        assert_eq!(table.weight_of("BBB").unwrap(), 0.3);
    }

    #[test]
    fn test_weight_of_unknown_symbol() {
        let table = sample();
        let err = table.weight_of("ZZZ").unwrap_err();
        assert!(matches!(err, Error::UnknownIdentifier(ref symbol) if symbol == "ZZZ"));
    }

    #[test]
    fn test_iter_yields_full_records() {
        let table = sample();
        let first = table.iter().next().unwrap();
        assert_eq!(first.symbol, "AAA");
        assert_eq!(first.weight, 0.5);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }
}
