//! Engine error taxonomy

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The observation sequence has zero elements. Fatal for the
    /// invocation and surfaced verbatim to the caller.
    #[error("no observations supplied: cannot compute a signal from an empty sequence")]
    EmptyInput,

    /// A close price was NaN or infinite at `position` (input order).
    /// The whole call fails; skipping the bar would desynchronize the
    /// rolling windows.
    #[error("non-finite close price {value} at position {position}")]
    NonFiniteClose { position: usize, value: f64 },

    /// Window configuration violated `1 <= short < long`.
    #[error("invalid window configuration: {0}")]
    InvalidWindows(#[from] ConfigError),
}
