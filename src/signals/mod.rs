//! Signal evaluation interfaces.

pub mod crossover;
pub mod engine;
pub mod error;
pub mod state;

pub use crossover::{count_crossings, detect_crossing, Crossing};
pub use engine::CrossoverEngine;
pub use error::EngineError;
pub use state::SignalState;
