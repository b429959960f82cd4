//! Dashboard payload: current conditions plus the daily strip

use serde::{Deserialize, Serialize};

use super::current::CurrentConditions;
use super::forecast::DailyForecast;

/// Everything the dashboard shows for one city query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
}
