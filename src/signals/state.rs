//! Per-position directional signal state

use serde::{Deserialize, Serialize};

use crate::models::MarketPosition;

/// Directional classification of one bar position.
///
/// A position is `Neutral` whenever either rolling mean is still undefined
/// (fewer than `window` bars of history) or the two means are exactly
/// equal; the pre-window period never produces a directional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalState {
    Bullish,
    Bearish,
    Neutral,
}

impl SignalState {
    /// Classify one position from its short and long rolling means.
    pub fn from_means(short: Option<f64>, long: Option<f64>) -> Self {
        match (short, long) {
            (Some(s), Some(l)) if s > l => SignalState::Bullish,
            (Some(s), Some(l)) if s < l => SignalState::Bearish,
            _ => SignalState::Neutral,
        }
    }

    /// Numeric code used by the transition scan: +1, -1 or 0.
    pub fn code(self) -> i8 {
        match self {
            SignalState::Bullish => 1,
            SignalState::Bearish => -1,
            SignalState::Neutral => 0,
        }
    }

    /// Market position reported when this is the latest state.
    pub fn market_position(self) -> MarketPosition {
        match self {
            SignalState::Bullish => MarketPosition::Buy,
            SignalState::Bearish => MarketPosition::Sell,
            SignalState::Neutral => MarketPosition::Neutral,
        }
    }
}
