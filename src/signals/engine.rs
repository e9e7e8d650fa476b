//! Dual moving-average crossover engine.

use tracing::debug;

use crate::config::CrossoverConfig;
use crate::indicators::trend::sma_series;
use crate::models::{Bar, StrategySummary};
use crate::signals::crossover::count_crossings;
use crate::signals::error::EngineError;
use crate::signals::state::SignalState;

pub struct CrossoverEngine;

impl CrossoverEngine {
    /// Compute the crossover summary for a sequence of bars.
    ///
    /// Bars may arrive unsorted; they are re-sorted ascending by timestamp
    /// (stable, so bars sharing a timestamp keep their input order).
    /// Sequences shorter than the long window still produce a summary in
    /// which every position stays `Neutral` while the means are undefined.
    /// The minimum-history gate belongs to the caller.
    ///
    /// Pure and deterministic: no hidden state is carried between
    /// invocations, and concurrent calls on independent inputs are safe.
    pub fn compute(bars: &[Bar], config: &CrossoverConfig) -> Result<StrategySummary, EngineError> {
        config.validate()?;

        if bars.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        for (position, bar) in bars.iter().enumerate() {
            if !bar.close.is_finite() {
                return Err(EngineError::NonFiniteClose {
                    position,
                    value: bar.close,
                });
            }
        }

        let mut ordered = bars.to_vec();
        ordered.sort_by_key(|bar| bar.timestamp);

        let closes: Vec<f64> = ordered.iter().map(|bar| bar.close).collect();
        let short_means = sma_series(&closes, config.short_window);
        let long_means = sma_series(&closes, config.long_window);

        let states: Vec<SignalState> = short_means
            .iter()
            .zip(long_means.iter())
            .map(|(&short, &long)| SignalState::from_means(short, long))
            .collect();

        let (buy_signals_count, sell_signals_count) = count_crossings(&states);

        let last = ordered.len() - 1;
        let current_state = states[last];

        debug!(
            total_records = ordered.len(),
            buy_signals = buy_signals_count,
            sell_signals = sell_signals_count,
            state = ?current_state,
            "crossover computation complete"
        );

        Ok(StrategySummary {
            strategy: config.strategy_label(),
            total_records: ordered.len(),
            buy_signals_count,
            sell_signals_count,
            current_market_position: current_state.market_position(),
            last_close_price: closes[last],
            sma_short_last: short_means[last],
            sma_long_last: long_means[last],
        })
    }
}
