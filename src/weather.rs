//! Weather API client for `OpenWeatherMap`
//!
//! Fetches raw provider payloads and runs them through the normalizers in
//! [`crate::models`]. Requests are made once; failures are returned to the
//! caller, which decides whether to retry.

use chrono::TimeZone;
use futures::future::join_all;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::config::ProviderConfig;
use crate::models::{
    City, CityWeather, UnitSystem, WeatherReport, aggregate_forecast_in, normalize_current_in,
};
use crate::openweather::{RawCurrentWeather, RawForecastResponse};
use crate::{Result, SkycastError};

const USER_AGENT: &str = concat!("SkyCast/", env!("CARGO_PKG_VERSION"));
const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Async client for the provider's current-weather and forecast endpoints
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    /// Create a client from provider settings. A missing API key is a
    /// configuration error.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| SkycastError::config("No weather API key configured"))?;
        Self::build(
            api_key,
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds.into()),
        )
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        Self::build(api_key.to_string(), base_url.to_string(), Duration::from_secs(10))
    }

    fn build(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Current conditions for a city name
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city: &str, units: UnitSystem) -> Result<RawCurrentWeather> {
        let city = validate_city(city)?;
        let query = format!("q={}&units={}", urlencoding::encode(city), units.as_query());
        self.get_json("weather", &query, city).await
    }

    /// Current conditions at a coordinate
    #[instrument(skip(self))]
    pub async fn current_weather_at(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<RawCurrentWeather> {
        let query = format!("lat={latitude}&lon={longitude}&units={}", units.as_query());
        let subject = format!("{latitude:.4}, {longitude:.4}");
        self.get_json("weather", &query, &subject).await
    }

    /// 5 day / 3 hour forecast for a city name
    #[instrument(skip(self))]
    pub async fn forecast(&self, city: &str, units: UnitSystem) -> Result<RawForecastResponse> {
        let city = validate_city(city)?;
        let query = format!("q={}&units={}", urlencoding::encode(city), units.as_query());
        self.get_json("forecast", &query, city).await
    }

    /// Fetch current conditions and forecast together and normalize both,
    /// formatting times in `tz`
    #[instrument(skip(self, tz))]
    pub async fn weather_report_in<Tz>(
        &self,
        city: &str,
        units: UnitSystem,
        tz: &Tz,
    ) -> Result<WeatherReport>
    where
        Tz: TimeZone + Sync,
        Tz::Offset: Display,
    {
        let (current, forecast) =
            tokio::try_join!(self.current_weather(city, units), self.forecast(city, units))?;

        let report = WeatherReport {
            current: normalize_current_in(&current, units, tz)?,
            forecast: aggregate_forecast_in(&forecast.list, tz)?,
        };
        info!(
            location = %report.current.location,
            days = report.forecast.len(),
            "Built weather report"
        );
        Ok(report)
    }

    /// Fetch metric current conditions for every city concurrently. Cities
    /// whose request or payload fails are logged and left out.
    #[instrument(skip_all, fields(cities = cities.len()))]
    pub async fn city_weather(&self, cities: Vec<City>) -> Vec<CityWeather> {
        let requests = cities.into_iter().map(|city| async move {
            let raw = self
                .current_weather_at(city.latitude, city.longitude, UnitSystem::Metric)
                .await;
            let name = city.name.clone();
            raw.and_then(|raw| CityWeather::from_current(city, &raw))
                .map_err(|e| (name, e))
        });

        join_all(requests)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(weather) => Some(weather),
                Err((name, e)) => {
                    warn!(city = %name, error = %e, "Skipping city without weather data");
                    None
                }
            })
            .collect()
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &str, subject: &str) -> Result<T> {
        debug!(endpoint, subject, "Requesting provider data");
        let start = Instant::now();

        let url = format!("{}/{endpoint}?{query}&appid={}", self.base_url, self.api_key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SkycastError::api(format!("Request for {subject} failed: {}", e.without_url())))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(SkycastError::not_found(subject)),
            StatusCode::UNAUTHORIZED => {
                return Err(SkycastError::config("Weather provider rejected the API key"));
            }
            status => {
                return Err(SkycastError::api(format!(
                    "Weather provider returned {status} for {subject}"
                )));
            }
        }

        let payload = response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            if e.is_decode() {
                SkycastError::malformed(format!("Invalid {endpoint} payload for {subject}: {e}"))
            } else {
                SkycastError::api(format!("Reading {endpoint} response for {subject} failed: {e}"))
            }
        })?;

        let elapsed = start.elapsed();
        if elapsed > SLOW_RESPONSE {
            warn!(endpoint, subject, "Slow provider response: {:.3}s", elapsed.as_secs_f64());
        } else {
            debug!(endpoint, subject, "Provider responded in {:.3}s", elapsed.as_secs_f64());
        }
        Ok(payload)
    }
}

fn validate_city(city: &str) -> Result<&str> {
    let city = city.trim();
    if city.is_empty() {
        return Err(SkycastError::validation("City cannot be empty"));
    }
    Ok(city)
}
