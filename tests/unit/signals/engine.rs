//! Unit tests for the crossover engine

use chrono::{Duration, Utc};
use crossline::config::CrossoverConfig;
use crossline::models::{Bar, MarketPosition};
use crossline::signals::{CrossoverEngine, EngineError};

fn create_test_bars(count: usize, base_price: f64) -> Vec<Bar> {
    let start = Utc::now() - Duration::minutes(count as i64);
    (0..count)
        .map(|i| {
            Bar::new(
                start + Duration::minutes(i as i64),
                base_price + i as f64,
            )
        })
        .collect()
}

#[test]
fn test_empty_input_is_an_error() {
    let result = CrossoverEngine::compute(&[], &CrossoverConfig::default());
    assert!(matches!(result, Err(EngineError::EmptyInput)));
}

#[test]
fn test_invalid_windows_are_rejected() {
    let config = CrossoverConfig {
        short_window: 50,
        long_window: 10,
    };
    let bars = create_test_bars(60, 100.0);
    let result = CrossoverEngine::compute(&bars, &config);
    assert!(matches!(result, Err(EngineError::InvalidWindows(_))));
}

#[test]
fn test_non_finite_close_is_rejected_with_position() {
    let mut bars = create_test_bars(10, 100.0);
    bars[2].close = f64::NAN;
    let result = CrossoverEngine::compute(&bars, &CrossoverConfig::default());
    match result {
        Err(EngineError::NonFiniteClose { position, .. }) => assert_eq!(position, 2),
        other => panic!("expected a non-finite close error, got {:?}", other),
    }
}

#[test]
fn test_compute_is_deterministic() {
    let bars = create_test_bars(60, 100.0);
    let config = CrossoverConfig::default();
    let first = CrossoverEngine::compute(&bars, &config).unwrap();
    let second = CrossoverEngine::compute(&bars, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_input_order_does_not_matter() {
    let mut bars = create_test_bars(60, 100.0);
    let config = CrossoverConfig::default();
    let sorted = CrossoverEngine::compute(&bars, &config).unwrap();

    bars.reverse();
    let reversed = CrossoverEngine::compute(&bars, &config).unwrap();
    assert_eq!(sorted, reversed);
}

#[test]
fn test_equal_timestamps_keep_input_order() {
    let timestamp = Utc::now();
    let bars = vec![Bar::new(timestamp, 5.0), Bar::new(timestamp, 7.0)];
    let config = CrossoverConfig::new(1, 2).unwrap();
    let summary = CrossoverEngine::compute(&bars, &config).unwrap();
    assert_eq!(summary.last_close_price, 7.0);
}

#[test]
fn test_warmup_transition_is_not_a_signal() {
    // A pure uptrend turns bullish as soon as both means exist, but the
    // step out of the undefined region must not count as a buy.
    let bars = create_test_bars(60, 100.0);
    let summary = CrossoverEngine::compute(&bars, &CrossoverConfig::default()).unwrap();
    assert_eq!(summary.buy_signals_count, 0);
    assert_eq!(summary.sell_signals_count, 0);
    assert_eq!(summary.current_market_position, MarketPosition::Buy);
}

#[test]
fn test_equal_means_are_neutral() {
    let start = Utc::now();
    let bars: Vec<Bar> = (0..60)
        .map(|i| Bar::new(start + Duration::minutes(i as i64), 100.0))
        .collect();
    let summary = CrossoverEngine::compute(&bars, &CrossoverConfig::default()).unwrap();
    assert_eq!(summary.current_market_position, MarketPosition::Neutral);
    assert_eq!(summary.buy_signals_count, 0);
    assert_eq!(summary.sell_signals_count, 0);
}

#[test]
fn test_small_windows_hand_computed() {
    let start = Utc::now();
    let closes = [1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0];
    let bars: Vec<Bar> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::new(start + Duration::minutes(i as i64), close))
        .collect();

    let config = CrossoverConfig::new(2, 3).unwrap();
    let summary = CrossoverEngine::compute(&bars, &config).unwrap();

    assert_eq!(summary.strategy, "Moving Average Crossover (2/3)");
    assert_eq!(summary.total_records, 7);
    assert_eq!(summary.buy_signals_count, 1);
    assert_eq!(summary.sell_signals_count, 1);
    assert_eq!(summary.current_market_position, MarketPosition::Buy);
    assert_eq!(summary.last_close_price, 3.0);
    assert_eq!(summary.sma_short_last, Some(2.5));
    assert_eq!(summary.sma_long_last, Some(2.0));
}

#[test]
fn test_signal_counts_are_bounded() {
    let start = Utc::now();
    let bars: Vec<Bar> = (0..40)
        .map(|i| {
            let close = if i % 6 < 3 { 100.0 + i as f64 } else { 100.0 - i as f64 };
            Bar::new(start + Duration::minutes(i as i64), close)
        })
        .collect();

    let config = CrossoverConfig::new(2, 3).unwrap();
    let summary = CrossoverEngine::compute(&bars, &config).unwrap();
    assert!(summary.buy_signals_count + summary.sell_signals_count <= summary.total_records - 1);
}
