use std::sync::Arc;

use chrono::Utc;
use log::debug;

use basketdrift_market_data::MarketDataProvider;

use crate::errors::{Error, Result};
use crate::holdings::HoldingsTable;
use crate::movement::{movement, weighted_movement};

use super::MovementReport;

/// Running average with the count folded in at every step.
///
/// Each step divides the sum of the prior mean and the new value by the
/// element count so far: for `[a, b, c]` the result is
/// `(((0 + a) / 1 + b) / 2 + c) / 3`, which is not the arithmetic mean.
/// Earlier elements decay with each step. The fold is the output contract:
/// the reported average must reproduce it bit for bit, including the f64
/// rounding at every division, so do not replace it with the incremental
/// mean. An empty slice yields 0.0.
pub fn weighted_average(values: &[f64]) -> f64 {
    let mut average = 0.0_f64;
    let mut count = 0.0_f64;
    for &value in values {
        count += 1.0;
        average = (average + value) / count;
    }
    average
}

/// Drives one comparison cycle: the fund's own movement on one side, the
/// weighted movements of its holdings on the other.
pub struct FundMovementReporter {
    fund_symbol: String,
    holdings: HoldingsTable,
    provider: Arc<dyn MarketDataProvider>,
}

impl FundMovementReporter {
    pub fn new(
        fund_symbol: impl Into<String>,
        holdings: HoldingsTable,
        provider: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            fund_symbol: fund_symbol.into(),
            holdings,
            provider,
        }
    }

    /// Intraday movement of the fund itself.
    pub async fn fund_movement(&self) -> Result<f64> {
        let quote = self
            .provider
            .fetch_quote(&self.fund_symbol)
            .await
            .map_err(|source| Error::FundFetch {
                symbol: self.fund_symbol.clone(),
                source,
            })?;
        Ok(movement(&quote))
    }

    /// Weighted movement of every holding, in table order.
    ///
    /// Fetches run one at a time and the first failure aborts the cycle, so
    /// a partial list never reaches the average.
    pub async fn underlying_weighted_movements(&self) -> Result<Vec<f64>> {
        let mut movements = Vec::with_capacity(self.holdings.len());
        for symbol in self.holdings.identifiers() {
            let weight = self.holdings.weight_of(symbol)?;
            let quote = self
                .provider
                .fetch_quote(symbol)
                .await
                .map_err(|source| Error::HoldingFetch {
                    symbol: symbol.to_string(),
                    source,
                })?;
            movements.push(weighted_movement(&quote, weight));
        }
        debug!(
            "Collected weighted movements for {} holdings",
            movements.len()
        );
        Ok(movements)
    }

    /// Run one full comparison cycle.
    pub async fn report(&self) -> Result<MovementReport> {
        debug!("Starting movement report for {}", self.fund_symbol);
        let fund_movement = self.fund_movement().await?;
        let movements = self.underlying_weighted_movements().await?;
        Ok(MovementReport {
            fund_symbol: self.fund_symbol.clone(),
            fund_movement,
            weighted_average_movement: weighted_average(&movements),
            holdings_count: movements.len(),
            generated_at: Utc::now(),
        })
    }
}
