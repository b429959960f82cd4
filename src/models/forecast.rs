//! Daily summaries of the 5 day / 3 hour forecast feed

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::condition::condition_icon;
use super::current::epoch_to_datetime;
use super::units::{round_half_up, round_temperature};
use crate::openweather::RawForecastEntry;
use crate::{Result, SkycastError};

/// Samples per calendar day in a 3-hour feed
pub const SAMPLES_PER_DAY: usize = 8;
/// Longest summary the dashboard shows
pub const MAX_FORECAST_DAYS: usize = 5;

/// One day of the forecast strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    /// `"Today"` or a weekday abbreviation (`"Mon"`)
    pub day: String,
    pub high: i64,
    pub low: i64,
    pub condition: String,
    pub icon: String,
    /// Probability of precipitation, percent
    pub precipitation: u8,
}

/// Summarize forecast entries per day, labelling weekdays in the local zone.
pub fn aggregate_forecast(entries: &[RawForecastEntry]) -> Result<Vec<DailyForecast>> {
    aggregate_forecast_in(entries, &Local)
}

/// Summarize forecast entries per day, labelling weekdays in `tz`.
///
/// The feed is assumed to be in strict 3-hour cadence, so each block of
/// [`SAMPLES_PER_DAY`] entries is one day. Entries are not regrouped by date.
/// High and low cover the whole block; condition, icon and precipitation
/// come from its first sample. At most [`MAX_FORECAST_DAYS`] days are returned.
pub fn aggregate_forecast_in<Tz>(entries: &[RawForecastEntry], tz: &Tz) -> Result<Vec<DailyForecast>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    entries
        .chunks(SAMPLES_PER_DAY)
        .take(MAX_FORECAST_DAYS)
        .enumerate()
        .map(|(index, window)| summarize_day(index, window, tz))
        .collect()
}

fn summarize_day<Tz>(index: usize, window: &[RawForecastEntry], tz: &Tz) -> Result<DailyForecast>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // chunks() never yields an empty slice
    let first = &window[0];
    let condition = first.weather.first().ok_or_else(|| {
        SkycastError::malformed(format!("forecast entry at {} has no weather entries", first.dt))
    })?;

    let day = if index == 0 {
        "Today".to_string()
    } else {
        epoch_to_datetime(first.dt, tz)?.format("%a").to_string()
    };

    let high = window
        .iter()
        .map(|entry| entry.main.temp_max)
        .fold(f64::NEG_INFINITY, f64::max);
    let low = window
        .iter()
        .map(|entry| entry.main.temp_min)
        .fold(f64::INFINITY, f64::min);

    Ok(DailyForecast {
        day,
        high: round_temperature(high),
        low: round_temperature(low),
        condition: condition.description.clone(),
        icon: condition_icon(&condition.icon).to_string(),
        precipitation: precipitation_percent(first.pop),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn precipitation_percent(pop: Option<f64>) -> u8 {
    round_half_up(pop.unwrap_or(0.0) * 100.0).clamp(0, 100) as u8
}
