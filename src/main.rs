//! Crossline demo
//!
//! Builds a synthetic price history that trends up and then rolls over,
//! runs the crossover strategy against it, and prints the resulting
//! performance report.

use chrono::{Duration, Utc};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

use crossline::config::CrossoverConfig;
use crossline::logging;
use crossline::models::Bar;
use crossline::services::{InMemoryBarProvider, PerformanceReport, PerformanceService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = CrossoverConfig::from_env()?;
    info!(
        short_window = config.short_window,
        long_window = config.long_window,
        "Starting Crossline demo"
    );

    let bars = synthetic_history(90);
    let provider = Arc::new(InMemoryBarProvider::new(bars));
    let service = PerformanceService::new(provider, config);

    let report = service.performance().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let PerformanceReport::Ready(summary) = &report {
        println!();
        print_summary(summary);
    }

    Ok(())
}

/// Generate a minute-spaced price series that rises for 60 bars and then
/// sells off hard enough to pull the short mean under the long one.
fn synthetic_history(count: usize) -> Vec<Bar> {
    let start = Utc::now() - Duration::minutes(count as i64);
    (0..count)
        .map(|i| {
            let close = if i < 60 {
                100.0 + i as f64
            } else {
                159.0 - 3.0 * (i - 59) as f64
            };
            Bar::new(start + Duration::minutes(i as i64), close)
        })
        .collect()
}

fn print_summary(summary: &crossline::models::StrategySummary) {
    println!("  Strategy: {}", summary.strategy);
    println!("  Records: {}", summary.total_records);
    println!("  Buy signals: {}", summary.buy_signals_count);
    println!("  Sell signals: {}", summary.sell_signals_count);
    println!("  Position: {:?}", summary.current_market_position);
    println!("  Last close: ${:.2}", summary.last_close_price);
    if let (Some(short), Some(long)) = (summary.sma_short_last, summary.sma_long_last) {
        println!("  SMA short/long: {:.2} / {:.2}", short, long);
    }
}
