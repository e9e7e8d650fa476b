//! Crossover window configuration and environment helpers.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const DEFAULT_SHORT_WINDOW: usize = 10;
pub const DEFAULT_LONG_WINDOW: usize = 50;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name} value '{value}': expected a positive integer")]
    InvalidWindowValue { name: &'static str, value: String },

    #[error("short window ({short_window}) must be at least 1 and smaller than long window ({long_window})")]
    InvalidWindows {
        short_window: usize,
        long_window: usize,
    },
}

/// Window lengths for the dual moving-average crossover.
///
/// Defaults to the documented 10/50 pair. The short window must stay
/// strictly smaller than the long window; `validate` enforces this and the
/// engine re-checks it on every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverConfig {
    pub short_window: usize,
    pub long_window: usize,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
        }
    }
}

impl CrossoverConfig {
    /// Create a validated configuration.
    pub fn new(short_window: usize, long_window: usize) -> Result<Self, ConfigError> {
        let config = Self {
            short_window,
            long_window,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_window == 0 || self.short_window >= self.long_window {
            return Err(ConfigError::InvalidWindows {
                short_window: self.short_window,
                long_window: self.long_window,
            });
        }
        Ok(())
    }

    /// Read window overrides from `SHORT_WINDOW` / `LONG_WINDOW`, falling
    /// back to the defaults for variables that are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let short_window = read_window("SHORT_WINDOW", DEFAULT_SHORT_WINDOW)?;
        let long_window = read_window("LONG_WINDOW", DEFAULT_LONG_WINDOW)?;
        Self::new(short_window, long_window)
    }

    /// Human-readable label, e.g. "Moving Average Crossover (10/50)".
    pub fn strategy_label(&self) -> String {
        format!(
            "Moving Average Crossover ({}/{})",
            self.short_window, self.long_window
        )
    }
}

fn read_window(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidWindowValue { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Deployment environment, used to pick the logging format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
