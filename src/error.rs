//! Error types and handling for the weather service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure talking to the upstream weather API
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection, timeout or body read failure
    #[error("making request to {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with something other than 200
    #[error("upstream returned status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Body was not the JSON shape we expect
    #[error("decoding response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure producing a forecast summary
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("failed to get grid coordinates: {0}")]
    GridLookup(#[source] UpstreamError),

    #[error("failed to get forecast: {0}")]
    ForecastLookup(#[source] UpstreamError),

    #[error("no forecast periods found")]
    NoForecastData,
}

/// Main error type surfaced by the HTTP front
#[derive(Error, Debug)]
pub enum ApiError {
    /// `lat` or `lng` absent or empty
    #[error("Missing required parameters: lat and lng")]
    MissingParameters,

    /// Parameter is not a decimal number, `name` is "latitude" or "longitude"
    #[error("Invalid {name} parameter")]
    InvalidParameter { name: &'static str },

    /// Coordinate parsed but lies outside the valid ranges
    #[error("Invalid coordinate ranges")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    /// Anything that went wrong behind the validation boundary
    #[error("Failed to get weather forecast: {0}")]
    Forecast(#[from] ForecastError),
}

impl ApiError {
    /// Create a new invalid parameter error
    #[must_use]
    pub fn invalid_parameter(name: &'static str) -> Self {
        Self::InvalidParameter { name }
    }

    /// HTTP status this error is reported with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters
            | ApiError::InvalidParameter { .. }
            | ApiError::CoordinateOutOfRange { .. } => StatusCode::BAD_REQUEST,
            ApiError::Forecast(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the caller. Upstream details stay in the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Forecast(_) => "Failed to get weather forecast".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Forecast(err) = &self {
            tracing::error!("Error getting weather: {err}");
        }
        (self.status_code(), self.user_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_errors_are_bad_requests() {
        assert_eq!(ApiError::MissingParameters.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::invalid_parameter("latitude").status_code(),
            StatusCode::BAD_REQUEST
        );
        let out_of_range = ApiError::CoordinateOutOfRange {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(out_of_range.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::MissingParameters.user_message(),
            "Missing required parameters: lat and lng"
        );
        assert_eq!(
            ApiError::invalid_parameter("longitude").user_message(),
            "Invalid longitude parameter"
        );
    }

    #[test]
    fn test_forecast_error_hides_detail() {
        let err = ApiError::from(ForecastError::GridLookup(UpstreamError::Status {
            url: "https://api.weather.gov/points/1.0000,2.0000".to_string(),
            status: 503,
        }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Failed to get weather forecast");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_no_data_conversion() {
        let err: ApiError = ForecastError::NoForecastData.into();
        assert!(matches!(
            err,
            ApiError::Forecast(ForecastError::NoForecastData)
        ));
    }
}
