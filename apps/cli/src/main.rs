//! Compares the intraday price movement of the QTUM ETF against the weighted
//! average movement of its underlying holdings and prints both side by side.

use std::process;
use std::sync::Arc;

use basketdrift_core::{
    FundMovementReporter, HoldingsTable, MovementReport, QTUM_SYMBOL, QTUM_WEIGHTS_AS_OF,
};
use basketdrift_market_data::YahooProvider;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!("Report cycle failed: {err}");
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let provider = Arc::new(YahooProvider::new()?);
    let holdings = HoldingsTable::qtum();

    tracing::info!(
        "Tracking {} against {} underlying holdings",
        QTUM_SYMBOL,
        holdings.len()
    );
    tracing::warn!(
        "Holding weights were captured {} and drift from the live composition",
        QTUM_WEIGHTS_AS_OF
    );

    let reporter = FundMovementReporter::new(QTUM_SYMBOL, holdings, provider);
    let report = reporter.report().await?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &MovementReport) {
    let banner = "*".repeat(102);
    let stamp = report.generated_at.format("%Y-%m-%d %H:%M UTC");

    println!("\n{banner}");
    println!(
        "\n {} Price Difference ({stamp}): \t\t\t\t {:.4}",
        report.fund_symbol, report.fund_movement
    );
    println!(
        "\n{} Underlying Assets ({}) Weighted Movements Combined Average Difference: \t {:.4}",
        report.fund_symbol, report.holdings_count, report.weighted_average_movement
    );
    println!("\n{banner}\n");
}

fn init_tracing() {
    let log_format =
        std::env::var("BASKETDRIFT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}
