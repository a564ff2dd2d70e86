//! National Weather Service API client
//!
//! Two lookups, always in this order: `/points/{lat},{lng}` resolves the grid
//! cell, `/gridpoints/{id}/{x},{y}/forecast` returns its forecast periods.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::ForecastSource;
use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::models::{Coordinate, ForecastPeriod, GridLocation};

/// Points API response
#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: GridLocation,
}

/// Gridpoint forecast API response
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

/// Weather API client for api.weather.gov
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base_url: String,
}

impl NwsClient {
    /// Create a new client from the upstream settings
    pub fn new(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the grid cell covering `coordinate`
    pub async fn grid_location(
        &self,
        coordinate: &Coordinate,
    ) -> Result<GridLocation, UpstreamError> {
        let url = format!("{}/points/{}", self.base_url, coordinate.points_key());
        let response: PointsResponse = self.get_json(&url).await?;
        Ok(response.properties)
    }

    /// Fetch the ordered forecast periods for a grid cell
    pub async fn forecast_periods(
        &self,
        grid: &GridLocation,
    ) -> Result<Vec<ForecastPeriod>, UpstreamError> {
        let url = format!(
            "{}/gridpoints/{}/{},{}/forecast",
            self.base_url, grid.grid_id, grid.grid_x, grid.grid_y
        );
        let response: ForecastResponse = self.get_json(&url).await?;
        Ok(response.properties.periods)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        debug!("NWS API request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/geo+json")
            .send()
            .await
            .map_err(|source| UpstreamError::Unreachable {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("NWS API returned status {} for {}", status.as_u16(), url);
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Unreachable {
                url: url.to_string(),
                source,
            })?;

        let parsed = serde_json::from_slice(&body).map_err(|source| UpstreamError::Malformed {
            url: url.to_string(),
            source,
        })?;

        info!(
            "NWS API request completed in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );
        Ok(parsed)
    }
}

#[async_trait]
impl ForecastSource for NwsClient {
    async fn grid_location(&self, coordinate: &Coordinate) -> Result<GridLocation, UpstreamError> {
        NwsClient::grid_location(self, coordinate).await
    }

    async fn forecast_periods(
        &self,
        grid: &GridLocation,
    ) -> Result<Vec<ForecastPeriod>, UpstreamError> {
        NwsClient::forecast_periods(self, grid).await
    }
}
