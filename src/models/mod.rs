//! View models and the pure transformations that build them
//!
//! This module contains the normalization pipeline organized by concern:
//! - Units, wind and condition: leaf conversions
//! - Current and forecast: provider payloads to dashboard view models
//! - Season, location and map: city map markers and their legend

pub mod condition;
pub mod current;
pub mod forecast;
pub mod location;
pub mod map;
pub mod report;
pub mod season;
pub mod units;
pub mod wind;

// Re-export all public types for convenient access
pub use condition::{DEFAULT_ICON, condition_icon};
pub use current::{CurrentConditions, format_clock_time, normalize_current, normalize_current_in, normalize_current_json};
pub use forecast::{DailyForecast, MAX_FORECAST_DAYS, SAMPLES_PER_DAY, aggregate_forecast, aggregate_forecast_in};
pub use location::{City, major_cities};
pub use map::{CityWeather, MapSummary};
pub use report::WeatherReport;
pub use season::{ALL_SEASONS_STYLE, LegendEntry, Season, SeasonCounts, SeasonFilter, SeasonStyle};
pub use units::{UnitSystem, convert_visibility, convert_wind_speed, round_half_up, round_temperature};
pub use wind::WindDirection;
