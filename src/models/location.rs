//! Validated geographic coordinate

use serde::Serialize;

use crate::error::ApiError;

/// Latitude/longitude pair that has passed range validation
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Accept a coordinate if latitude is in [-90, 90] and longitude in [-180, 180].
    /// NaN never passes.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ApiError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ApiError::CoordinateOutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Path segment used by the points lookup
    #[must_use]
    pub fn points_key(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}
