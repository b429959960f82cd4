//! Compass bearing to 16-point wind direction

use serde::{Deserialize, Serialize};
use std::fmt;

use super::units::round_half_up;

const SECTOR_DEGREES: f64 = 22.5;

/// One of the 16 compass points, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WindDirection {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl WindDirection {
    /// Compass points in index order
    pub const ALL: [WindDirection; 16] = [
        WindDirection::N,
        WindDirection::Nne,
        WindDirection::Ne,
        WindDirection::Ene,
        WindDirection::E,
        WindDirection::Ese,
        WindDirection::Se,
        WindDirection::Sse,
        WindDirection::S,
        WindDirection::Ssw,
        WindDirection::Sw,
        WindDirection::Wsw,
        WindDirection::W,
        WindDirection::Wnw,
        WindDirection::Nw,
        WindDirection::Nnw,
    ];

    /// Resolve any bearing in degrees, including negative values and values
    /// past 360. Midpoints between two sectors go to the clockwise one.
    /// Non-finite bearings resolve to north.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return WindDirection::N;
        }
        let sector = round_half_up(degrees / SECTOR_DEGREES).rem_euclid(16);
        // rem_euclid keeps the index in 0..16
        Self::ALL[sector as usize]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::Nne => "NNE",
            WindDirection::Ne => "NE",
            WindDirection::Ene => "ENE",
            WindDirection::E => "E",
            WindDirection::Ese => "ESE",
            WindDirection::Se => "SE",
            WindDirection::Sse => "SSE",
            WindDirection::S => "S",
            WindDirection::Ssw => "SSW",
            WindDirection::Sw => "SW",
            WindDirection::Wsw => "WSW",
            WindDirection::W => "W",
            WindDirection::Wnw => "WNW",
            WindDirection::Nw => "NW",
            WindDirection::Nnw => "NNW",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
