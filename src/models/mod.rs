//! Shared data models spanning the engine layers.

pub mod bar;
pub mod summary;

pub use bar::Bar;
pub use summary::{MarketPosition, StrategySummary};
