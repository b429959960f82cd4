//! JSON endpoints consumed by the dashboard and map pages

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use crate::models::{City, MapSummary, SeasonFilter, UnitSystem, WeatherReport};
use crate::{SkycastError, VERSION, WeatherApiClient};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: WeatherApiClient,
    pub default_city: String,
    pub default_units: UnitSystem,
    pub cities: Vec<City>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub units: Option<String>,
    /// IANA zone used for sunrise/sunset and weekday labels
    pub tz: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MapQuery {
    pub season: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather))
        .route("/map", get(get_map))
        .with_state(Arc::new(state))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": VERSION }))
}

async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, SkycastError> {
    let city = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(state.default_city.as_str());
    let units = match query.units.as_deref() {
        Some(units) if !units.trim().is_empty() => units.parse()?,
        _ => state.default_units,
    };

    let report = match query.tz.as_deref().map(str::trim).filter(|tz| !tz.is_empty()) {
        Some(name) => {
            let tz: chrono_tz::Tz = name
                .parse()
                .map_err(|_| SkycastError::validation(format!("Unknown time zone '{name}'")))?;
            state.client.weather_report_in(city, units, &tz).await?
        }
        None => state.client.weather_report_in(city, units, &Local).await?,
    };
    Ok(Json(report))
}

async fn get_map(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapSummary>, SkycastError> {
    let filter: SeasonFilter = query.season.as_deref().unwrap_or("all").parse()?;
    let cities = state.client.city_weather(state.cities.clone()).await;
    Ok(Json(MapSummary::build(cities, filter)))
}

impl SkycastError {
    fn status_code(&self) -> StatusCode {
        match self {
            SkycastError::NotFound { .. } => StatusCode::NOT_FOUND,
            SkycastError::Validation { .. } => StatusCode::BAD_REQUEST,
            SkycastError::MalformedResponse { .. } | SkycastError::Api { .. } => StatusCode::BAD_GATEWAY,
            SkycastError::Config { .. } | SkycastError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SkycastError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
