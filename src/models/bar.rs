//! Price bar observations consumed by the signal engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped closing-price sample.
///
/// The ordering key is `timestamp`. Bars sharing a timestamp keep their
/// input order: the engine sorts stably and there is no secondary key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl Bar {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}
