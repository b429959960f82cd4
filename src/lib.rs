//! `SkyCast` - Weather dashboard backend
//!
//! Normalizes raw `OpenWeatherMap` current-weather and forecast payloads into
//! display-ready view models, classifies cities by season for the world map,
//! and serves both over a small JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod openweather;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use models::{
    City, CityWeather, CurrentConditions, DailyForecast, MapSummary, Season, UnitSystem,
    WeatherReport, WindDirection,
};
pub use weather::WeatherApiClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;
