//! Bar provider interface for injected observation sources.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Bar;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("observation source failed: {0}")]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// An injected source of price bars.
///
/// The engine takes data by value and has no lifecycle coupling to the
/// source; any component able to produce a sequence of bars can implement
/// this. Bars may arrive in any order, the engine re-sorts by timestamp.
#[async_trait]
pub trait BarProvider: Send + Sync {
    async fn fetch_bars(&self) -> Result<Vec<Bar>, ProviderError>;
}

/// Provider serving a preloaded in-memory series, used by tests and demos.
pub struct InMemoryBarProvider {
    bars: Vec<Bar>,
}

impl InMemoryBarProvider {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }
}

#[async_trait]
impl BarProvider for InMemoryBarProvider {
    async fn fetch_bars(&self) -> Result<Vec<Bar>, ProviderError> {
        Ok(self.bars.clone())
    }
}
