//! Performance service: the call-site boundary around the engine.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::CrossoverConfig;
use crate::models::StrategySummary;
use crate::services::provider::{BarProvider, ProviderError};
use crate::signals::engine::CrossoverEngine;
use crate::signals::error::EngineError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("failed to fetch bars: {0}")]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Outcome of a performance request.
///
/// Insufficient history is informational, not an error; it carries the
/// available and required counts alongside the reader-facing message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerformanceReport {
    Ready(StrategySummary),
    InsufficientHistory {
        message: String,
        available: usize,
        required: usize,
    },
}

impl PerformanceReport {
    pub fn insufficient(available: usize, required: usize) -> Self {
        PerformanceReport::InsufficientHistory {
            message: format!(
                "Not enough data points to calculate {}-period moving average.",
                required
            ),
            available,
            required,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PerformanceReport::Ready(_))
    }
}

/// Wraps an injected bar provider and the crossover engine, enforcing the
/// minimum-history gate (`>= long_window` bars) outside the engine.
pub struct PerformanceService {
    provider: Arc<dyn BarProvider>,
    config: CrossoverConfig,
}

impl PerformanceService {
    pub fn new(provider: Arc<dyn BarProvider>, config: CrossoverConfig) -> Self {
        Self { provider, config }
    }

    /// Fetch bars from the provider and compute the crossover summary.
    pub async fn performance(&self) -> Result<PerformanceReport, ServiceError> {
        let bars = self.provider.fetch_bars().await?;

        if bars.len() < self.config.long_window {
            info!(
                available = bars.len(),
                required = self.config.long_window,
                "not enough bars for a meaningful crossover summary"
            );
            return Ok(PerformanceReport::insufficient(
                bars.len(),
                self.config.long_window,
            ));
        }

        let summary = CrossoverEngine::compute(&bars, &self.config)?;
        Ok(PerformanceReport::Ready(summary))
    }
}
