//! Forecast models shared by the upstream client, the service and the HTTP front

use serde::{Deserialize, Serialize};

/// Temperature at or above which a period counts as hot (°F)
pub const HOT_THRESHOLD_F: i32 = 80;
/// Temperature at or below which a period counts as cold (°F)
pub const COLD_THRESHOLD_F: i32 = 50;

/// Upstream spatial index for forecast data
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GridLocation {
    /// Forecast office identifier, e.g. "OKX"
    #[serde(rename = "gridId")]
    pub grid_id: String,
    #[serde(rename = "gridX")]
    pub grid_x: i64,
    #[serde(rename = "gridY")]
    pub grid_y: i64,
}

/// A discrete forecast window such as "Today" or "Tonight"
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    /// Temperature in Fahrenheit
    pub temperature: i32,
    pub short_forecast: String,
    pub is_daytime: bool,
}

/// Coarse temperature bucket
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCategory {
    Hot,
    Cold,
    Moderate,
}

impl TemperatureCategory {
    /// Classify a Fahrenheit temperature. Both thresholds are inclusive.
    #[must_use]
    pub fn from_fahrenheit(temperature: i32) -> Self {
        match temperature {
            t if t >= HOT_THRESHOLD_F => TemperatureCategory::Hot,
            t if t <= COLD_THRESHOLD_F => TemperatureCategory::Cold,
            _ => TemperatureCategory::Moderate,
        }
    }
}

/// Response body of `GET /weather`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastSummary {
    /// Short description of the selected period
    pub forecast: String,
    pub temperature: TemperatureCategory,
    /// Echo of the requested coordinate, four decimals
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(85, TemperatureCategory::Hot)]
    #[case(80, TemperatureCategory::Hot)]
    #[case(79, TemperatureCategory::Moderate)]
    #[case(65, TemperatureCategory::Moderate)]
    #[case(51, TemperatureCategory::Moderate)]
    #[case(50, TemperatureCategory::Cold)]
    #[case(30, TemperatureCategory::Cold)]
    #[case(-10, TemperatureCategory::Cold)]
    fn test_categorize_temperature(#[case] temperature: i32, #[case] expected: TemperatureCategory) {
        assert_eq!(TemperatureCategory::from_fahrenheit(temperature), expected);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = ForecastSummary {
            forecast: "Sunny".to_string(),
            temperature: TemperatureCategory::Moderate,
            location: "40.7128, -74.0060".to_string(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "forecast": "Sunny",
                "temperature": "moderate",
                "location": "40.7128, -74.0060"
            })
        );
    }

    #[test]
    fn test_period_deserialization() {
        let period: ForecastPeriod = serde_json::from_str(
            r#"{"number":1,"name":"This Afternoon","temperature":72,"temperatureUnit":"F",
                "shortForecast":"Partly Sunny","isDaytime":true}"#,
        )
        .unwrap();
        assert_eq!(period.name, "This Afternoon");
        assert_eq!(period.temperature, 72);
        assert_eq!(period.short_forecast, "Partly Sunny");
        assert!(period.is_daytime);
    }
}
