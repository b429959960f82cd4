//! Unit system selection and the metric/imperial conversions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SkycastError;

const MPS_TO_KMH: f64 = 3.6;
const MPS_TO_MPH: f64 = 2.237;
const METERS_PER_KM: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.34;

/// Measurement convention for one normalization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, km/h, km
    #[default]
    Metric,
    /// Fahrenheit, mph, miles
    Imperial,
}

impl UnitSystem {
    /// Value of the provider's `units` query parameter
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    #[must_use]
    pub fn temperature_symbol(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    #[must_use]
    pub fn speed_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }

    #[must_use]
    pub fn distance_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "km",
            UnitSystem::Imperial => "mi",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for UnitSystem {
    type Err = SkycastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(SkycastError::validation(format!(
                "Unknown unit system '{other}'. Must be one of: metric, imperial"
            ))),
        }
    }
}

/// Round to the nearest integer, exact halves going toward positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Format with one decimal from the exact binary value, so `0.35` (stored
/// just below) gives `"0.3"`. Exact ties such as `0.25` round away from zero.
fn format_tenths(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value.abs() * 10.0 + 0.5).floor().copysign(value);
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// Temperatures arrive in the requested unit already; they are only rounded.
#[must_use]
pub fn round_temperature(value: f64) -> i64 {
    round_half_up(value)
}

/// Convert a provider wind speed (m/s) to km/h or mph, rounded for display.
#[must_use]
pub fn convert_wind_speed(meters_per_second: f64, units: UnitSystem) -> i64 {
    let factor = match units {
        UnitSystem::Metric => MPS_TO_KMH,
        UnitSystem::Imperial => MPS_TO_MPH,
    };
    round_half_up(meters_per_second * factor)
}

/// Convert a provider visibility (meters) to km or miles with one decimal.
#[must_use]
pub fn convert_visibility(meters: f64, units: UnitSystem) -> String {
    let divisor = match units {
        UnitSystem::Metric => METERS_PER_KM,
        UnitSystem::Imperial => METERS_PER_MILE,
    };
    format_tenths(meters / divisor)
}
