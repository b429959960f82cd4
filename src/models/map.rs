//! City map markers and the season summary above the map

use serde::Serialize;

use super::location::City;
use super::season::{LegendEntry, Season, SeasonCounts, SeasonFilter, SeasonStyle};
use super::units::{round_half_up, round_temperature};
use crate::openweather::RawCurrentWeather;
use crate::{Result, SkycastError};

/// One map marker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityWeather {
    #[serde(flatten)]
    pub city: City,
    /// Celsius, rounded
    pub temperature: i64,
    pub condition: String,
    pub humidity: u8,
    /// Lower-case condition group, e.g. `"rain"`
    pub category: String,
    pub season: Season,
    /// Marker color and icon for `season`
    pub style: SeasonStyle,
}

impl CityWeather {
    /// Build a marker from a metric current-weather payload. The season is
    /// classified from the unrounded temperature.
    pub fn from_current(city: City, raw: &RawCurrentWeather) -> Result<Self> {
        let condition = raw
            .weather
            .first()
            .ok_or_else(|| SkycastError::malformed(format!("no weather entries for {}", city.name)))?;

        let season = Season::from_temperature(raw.main.temp);
        Ok(Self {
            temperature: round_temperature(raw.main.temp),
            condition: condition.description.clone(),
            humidity: raw.main.humidity,
            category: condition.main.to_lowercase(),
            season,
            style: season.style(),
            city,
        })
    }
}

/// Markers for the selected season plus the legend numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub filter: Option<Season>,
    pub cities: Vec<CityWeather>,
    /// Counts over every city, regardless of the filter
    pub counts: SeasonCounts,
    /// Rounded mean of the rounded city temperatures; 0 with no cities
    pub average_temperature: i64,
    /// Legend rows with their counts
    pub legend: Vec<LegendEntry>,
}

impl MapSummary {
    #[must_use]
    pub fn build(cities: Vec<CityWeather>, filter: SeasonFilter) -> Self {
        let counts = SeasonCounts::tally(cities.iter().map(|c| c.season));
        let average_temperature = average_temperature(&cities);
        let cities = cities
            .into_iter()
            .filter(|c| filter.matches(c.season))
            .collect();

        Self {
            filter: match filter {
                SeasonFilter::All => None,
                SeasonFilter::Only(season) => Some(season),
            },
            cities,
            legend: counts.legend(),
            counts,
            average_temperature,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn average_temperature(cities: &[CityWeather]) -> i64 {
    if cities.is_empty() {
        return 0;
    }
    let sum: i64 = cities.iter().map(|c| c.temperature).sum();
    round_half_up(sum as f64 / cities.len() as f64)
}
