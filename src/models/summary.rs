//! Summary value object produced once per engine invocation.

use serde::{Deserialize, Serialize};

/// Directional classification reported for the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketPosition {
    Buy,
    Sell,
    Neutral,
}

/// Result of one crossover computation, never persisted or mutated.
///
/// Field names match the payload result sinks consume; the tail means are
/// absent when the sequence is shorter than the corresponding window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub total_records: usize,
    pub buy_signals_count: usize,
    pub sell_signals_count: usize,
    pub current_market_position: MarketPosition,
    pub last_close_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short_last: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long_last: Option<f64>,
}
