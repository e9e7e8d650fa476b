//! Crossline
//!
//! Moving-average crossover signal engine. Computes dual SMA series over
//! historical close prices, derives bullish/bearish market state from the
//! spread between them, and summarizes crossings into a strategy report.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
