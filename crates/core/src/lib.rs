//! Basketdrift core crate.
//!
//! Compares the intraday movement of a fund against the weighted movements of
//! its underlying holdings. The crate owns the holdings table and the
//! movement arithmetic; the [`FundMovementReporter`] drives a market data
//! provider and folds per-holding results into a [`MovementReport`].
//!
//! Market data access stays behind the provider trait from
//! `basketdrift-market-data`; nothing in this crate talks to the network
//! directly.

pub mod errors;
pub mod holdings;
pub mod movement;
pub mod report;

pub use errors::{Error, Result};
pub use holdings::{HoldingRecord, HoldingsTable, QTUM_SYMBOL, QTUM_WEIGHTS_AS_OF};
pub use movement::{movement, weighted_movement};
pub use report::{weighted_average, FundMovementReporter, MovementReport};
