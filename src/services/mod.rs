//! Service layer: observation sources and the performance boundary.

pub mod performance;
pub mod provider;

pub use performance::{PerformanceReport, PerformanceService, ServiceError};
pub use provider::{BarProvider, InMemoryBarProvider, ProviderError};
