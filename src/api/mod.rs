use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{any, get},
};
use serde_json::{Value, json};

use crate::{
    Result,
    error::ApiError,
    models::{Coordinate, ForecastSummary},
    weather::WeatherService,
};

const USAGE: &str = "Weather Service

Usage: GET /weather?lat={latitude}&lng={longitude}

Example: /weather?lat=40.7128&lng=-74.0060

Returns JSON with:
- forecast: Short weather description
- temperature: \"hot\", \"cold\", or \"moderate\"
- location: Coordinates used

Health check: GET /health
";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: WeatherService,
}

/// Raw `/weather` query. Kept as strings so each failure gets its own message.
#[derive(Debug, Default)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl WeatherQuery {
    /// Collect `lat` and `lng` from decoded query pairs. The first occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut query.lat,
                "lng" => &mut query.lng,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Parse and range-check the query into a coordinate
    pub fn coordinate(&self) -> Result<Coordinate> {
        let (Some(lat), Some(lng)) = (non_empty(&self.lat), non_empty(&self.lng)) else {
            return Err(ApiError::MissingParameters);
        };

        let latitude: f64 = lat
            .parse()
            .map_err(|_| ApiError::invalid_parameter("latitude"))?;
        let longitude: f64 = lng
            .parse()
            .map_err(|_| ApiError::invalid_parameter("longitude"))?;

        Coordinate::new(latitude, longitude)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(usage))
        .route("/weather", get(get_weather))
        .route("/health", any(health))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

async fn get_weather(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ForecastSummary>> {
    let coordinate = WeatherQuery::from_pairs(pairs).coordinate()?;
    let summary = state.service.get_forecast(&coordinate).await?;
    Ok(Json(summary))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn usage() -> &'static str {
    USAGE
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
