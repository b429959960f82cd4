//! `OpenWeatherMap` response structures
//!
//! Only the fields the normalizers read are modeled. Every parse failure is
//! reported as [`SkycastError::MalformedResponse`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{Result, SkycastError};

/// Response of the `/weather` (current conditions) endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrentWeather {
    pub name: String,
    pub sys: RawSys,
    pub main: RawMain,
    pub wind: RawWind,
    /// Meters
    pub visibility: f64,
    #[serde(default)]
    pub clouds: Option<RawClouds>,
    /// Absent arrays are kept empty so the normalizer can report them
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSys {
    pub country: String,
    /// Epoch seconds
    pub sunrise: i64,
    /// Epoch seconds
    pub sunset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// hPa
    pub pressure: f64,
    /// Percent
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWind {
    /// Meters per second
    pub speed: f64,
    /// Bearing in degrees
    pub deg: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawClouds {
    #[serde(default)]
    pub all: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    #[serde(default)]
    pub id: Option<u32>,
    /// Condition group, e.g. `"Rain"`
    #[serde(default)]
    pub main: String,
    /// Lower-case description, e.g. `"light rain"`
    pub description: String,
    /// Icon code, e.g. `"10d"`
    pub icon: String,
}

/// Response of the `/forecast` (5 day / 3 hour) endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastResponse {
    pub list: Vec<RawForecastEntry>,
}

/// One 3-hour sample of the forecast feed
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastEntry {
    /// Epoch seconds
    pub dt: i64,
    pub main: RawForecastMain,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    /// Probability of precipitation, 0.0 to 1.0
    #[serde(default)]
    pub pop: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastMain {
    #[serde(default)]
    pub temp: Option<f64>,
    pub temp_min: f64,
    pub temp_max: f64,
}

impl RawCurrentWeather {
    pub fn from_json(json: &str) -> Result<Self> {
        parse_str(json)
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        parse_value(value)
    }
}

impl RawForecastResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        parse_str(json)
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        parse_value(value)
    }
}

fn parse_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(SkycastError::from)
}

fn parse_value<T: DeserializeOwned>(value: &serde_json::Value) -> Result<T> {
    T::deserialize(value).map_err(SkycastError::from)
}
