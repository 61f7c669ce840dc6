//! Compiled-in constituent table for the Defiance QTUM ETF.
//!
//! Weights were captured manually on 2021-12-24 and are not refreshed. The
//! fund is actively managed, so the table drifts from the live composition
//! and exists to exercise the comparison pipeline rather than to mirror the
//! fund in real time.
//!
//! A "cash and other" sleeve of roughly 0.45% is not a tradable symbol and
//! is omitted (it sat between AYX and BIDU in the captured list), which is
//! why the listed weights sum to 0.9955 instead of 1. Venue aliases worth
//! knowing when cross-checking Bloomberg style feeds: KKPNY is "KPN NA",
//! while AIR.PA and ATO.PA are "AIR FP" and "ATO FP".

use super::HoldingsTable;

/// Yahoo symbol of the tracked fund.
pub const QTUM_SYMBOL: &str = "QTUM";

/// Date the constituent weights were last captured.
pub const QTUM_WEIGHTS_AS_OF: &str = "2021-12-24";

const QTUM_HOLDINGS: &[(&str, f64)] = &[
    ("ADI", 0.0133),
    ("SYNA", 0.0137),
    ("AMBA", 0.0133),
    ("AMD", 0.0144),
    ("MRVL", 0.0138),
    ("NVDA", 0.0134),
    ("ON", 0.0149),
    ("XLNX", 0.0138),
    ("CDNS", 0.0146),
    ("ACN", 0.0154),
    ("LSCC", 0.0136),
    ("TSEM", 0.0143),
    ("9613.T", 0.0141),
    ("SNPS", 0.0144),
    ("4185.T", 0.0144),
    ("QCOM", 0.0143),
    ("MSFT", 0.0143),
    ("TER", 0.0145),
    ("KLAC", 0.0143),
    ("STM", 0.0142),
    ("ONTO", 0.0145),
    ("FORM", 0.0143),
    ("GOOGL", 0.0142),
    ("REY.MI", 0.0141),
    ("6723.T", 0.0136),
    ("CRUS", 0.0148),
    ("MCHP", 0.0143),
    ("NOK", 0.0151),
    ("IFX.DE", 0.014),
    ("NXPI", 0.0143),
    ("MSTR", 0.0135),
    ("ASML", 0.0143),
    ("AMAT", 0.0142),
    ("WIT", 0.0155),
    ("9432.T", 0.0146),
    ("MU", 0.0157),
    ("LRCX", 0.014),
    ("6702.T", 0.0144),
    ("2454.TW", 0.0142),
    ("NATI", 0.0142),
    ("NOC", 0.015),
    ("TXN", 0.0137),
    ("6501.T", 0.013),
    ("TSM", 0.0142),
    ("AZTA", 0.0132),
    ("6701.T", 0.0138),
    ("6502.T", 0.014),
    ("HPE", 0.0145),
    ("BAH", 0.0139),
    ("SPLK", 0.0139),
    ("RTX", 0.0141),
    ("KKPNY", 0.015),
    ("INTC", 0.0142),
    ("LMT", 0.0146),
    ("MKSI", 0.0146),
    ("TDC", 0.0144),
    ("ESTC", 0.0139),
    ("2357.TW", 0.0147),
    ("AIR.PA", 0.015),
    ("IBM", 0.0152),
    ("6503.T", 0.0146),
    ("ORAN", 0.0146),
    ("AYX", 0.0135),
    ("BIDU", 0.0139),
    ("ATO.PA", 0.0147),
    ("BB", 0.0146),
    ("BABA", 0.0136),
    ("HON", 0.0144),
    ("PRFT", 0.0137),
    ("IONQ", 0.0122),
];

impl HoldingsTable {
    /// Table of QTUM constituents with their captured weights.
    pub fn qtum() -> Self {
        Self::new(QTUM_HOLDINGS.iter().copied())
    }
}
