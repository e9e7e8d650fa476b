pub mod trend;

pub use trend::sma_series;
