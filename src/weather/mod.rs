use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::{ForecastError, UpstreamError};
use crate::models::{Coordinate, ForecastPeriod, ForecastSummary, GridLocation, TemperatureCategory};

pub mod nws;

pub use nws::NwsClient;

/// Upstream that can resolve a grid cell and list its forecast periods
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn grid_location(&self, coordinate: &Coordinate) -> Result<GridLocation, UpstreamError>;

    async fn forecast_periods(
        &self,
        grid: &GridLocation,
    ) -> Result<Vec<ForecastPeriod>, UpstreamError>;
}

/// Turns a coordinate into today's forecast summary
#[derive(Clone)]
pub struct WeatherService {
    source: Arc<dyn ForecastSource>,
}

impl WeatherService {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self), fields(location = %coordinate.format_coordinates()))]
    pub async fn get_forecast(
        &self,
        coordinate: &Coordinate,
    ) -> Result<ForecastSummary, ForecastError> {
        let grid = self
            .source
            .grid_location(coordinate)
            .await
            .map_err(ForecastError::GridLookup)?;
        debug!(
            "Resolved grid {}/{},{}",
            grid.grid_id, grid.grid_x, grid.grid_y
        );

        let periods = self
            .source
            .forecast_periods(&grid)
            .await
            .map_err(ForecastError::ForecastLookup)?;

        let period = select_today_period(&periods)?;
        debug!("Selected period '{}'", period.name);

        Ok(ForecastSummary {
            forecast: period.short_forecast.clone(),
            temperature: TemperatureCategory::from_fahrenheit(period.temperature),
            location: coordinate.format_coordinates(),
        })
    }
}

/// Pick the period that stands for "today".
///
/// The first period is used unless it is a night period and the second one is
/// named like "today", in which case the second wins. Only the second entry is
/// ever considered.
pub fn select_today_period(periods: &[ForecastPeriod]) -> Result<&ForecastPeriod, ForecastError> {
    let first = periods.first().ok_or(ForecastError::NoForecastData)?;

    match periods.get(1) {
        Some(second) if !first.is_daytime && second.name.to_lowercase().contains("today") => {
            Ok(second)
        }
        _ => Ok(first),
    }
}
