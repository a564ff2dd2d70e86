//! Weather service
//!
//! Looks up the National Weather Service forecast for a coordinate, picks the
//! period that represents today and reports it with a hot/cold/moderate label.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::ServiceConfig;
pub use error::{ApiError, ForecastError, UpstreamError};
pub use models::{Coordinate, ForecastPeriod, ForecastSummary, GridLocation, TemperatureCategory};
pub use weather::{ForecastSource, NwsClient, WeatherService, select_today_period};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used by the HTTP front
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
