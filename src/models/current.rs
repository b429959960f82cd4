//! Current-conditions view model and its normalizer

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::condition::condition_icon;
use super::units::{UnitSystem, convert_visibility, convert_wind_speed, round_temperature};
use super::wind::WindDirection;
use crate::openweather::RawCurrentWeather;
use crate::{Result, SkycastError};

/// Display-ready current weather for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// `"City, CC"`
    pub location: String,
    pub temperature: i64,
    pub feels_like: i64,
    /// Provider description, passed through as is
    pub condition: String,
    pub humidity: u8,
    /// km/h or mph
    pub wind_speed: i64,
    pub wind_direction: WindDirection,
    /// hPa
    pub pressure: f64,
    /// km or miles, one decimal
    pub visibility: String,
    pub sunrise: String,
    pub sunset: String,
    pub icon: String,
    pub high: i64,
    pub low: i64,
    /// Cloud coverage percent
    pub clouds: u8,
    pub units: UnitSystem,
    /// `°C` or `°F`
    pub temperature_unit: String,
    /// `km/h` or `mph`
    pub speed_unit: String,
    /// `km` or `mi`
    pub distance_unit: String,
}

/// Normalize a current-weather payload, formatting times in the local zone.
pub fn normalize_current(raw: &RawCurrentWeather, units: UnitSystem) -> Result<CurrentConditions> {
    normalize_current_in(raw, units, &Local)
}

/// Normalize a current-weather payload, formatting times in `tz`.
pub fn normalize_current_in<Tz>(
    raw: &RawCurrentWeather,
    units: UnitSystem,
    tz: &Tz,
) -> Result<CurrentConditions>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let condition = raw
        .weather
        .first()
        .ok_or_else(|| SkycastError::malformed("current weather payload has no weather entries"))?;

    Ok(CurrentConditions {
        location: format!("{}, {}", raw.name, raw.sys.country),
        temperature: round_temperature(raw.main.temp),
        feels_like: round_temperature(raw.main.feels_like),
        condition: condition.description.clone(),
        humidity: raw.main.humidity,
        wind_speed: convert_wind_speed(raw.wind.speed, units),
        wind_direction: WindDirection::from_degrees(raw.wind.deg),
        pressure: raw.main.pressure,
        visibility: convert_visibility(raw.visibility, units),
        sunrise: format_clock_time(raw.sys.sunrise, tz)?,
        sunset: format_clock_time(raw.sys.sunset, tz)?,
        icon: condition_icon(&condition.icon).to_string(),
        high: round_temperature(raw.main.temp_max),
        low: round_temperature(raw.main.temp_min),
        clouds: raw.clouds.as_ref().and_then(|c| c.all).unwrap_or(0),
        units,
        temperature_unit: units.temperature_symbol().to_string(),
        speed_unit: units.speed_unit().to_string(),
        distance_unit: units.distance_unit().to_string(),
    })
}

/// Parse a `/weather` JSON document and normalize it in the local zone.
pub fn normalize_current_json(value: &serde_json::Value, units: UnitSystem) -> Result<CurrentConditions> {
    let raw = RawCurrentWeather::from_value(value)?;
    normalize_current(&raw, units)
}

/// Format epoch seconds as a 12-hour clock time, e.g. `6:05 AM`.
pub fn format_clock_time<Tz>(epoch_seconds: i64, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let instant = epoch_to_datetime(epoch_seconds, tz)?;
    Ok(instant.format("%-I:%M %p").to_string())
}

pub(crate) fn epoch_to_datetime<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> Result<DateTime<Tz>> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|utc| utc.with_timezone(tz))
        .ok_or_else(|| SkycastError::malformed(format!("timestamp {epoch_seconds} is out of range")))
}
