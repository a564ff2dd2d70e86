//! Data models for the weather service
//!
//! - Location: validated coordinate taken from the request
//! - Forecast: upstream grid/period types and the summary returned to callers

pub mod forecast;
pub mod location;

pub use forecast::{ForecastPeriod, ForecastSummary, GridLocation, TemperatureCategory};
pub use location::Coordinate;
