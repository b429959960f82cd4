//! Temperature-bucket "seasons" used to color and filter map markers
//!
//! The buckets are a coarse global heuristic on the current temperature and
//! have nothing to do with the calendar or the hemisphere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SkycastError;

const WINTER_MAX: f64 = 10.0;
const SPRING_MAX: f64 = 20.0;
const SUMMER_MAX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    /// Classify a Celsius temperature. Upper bounds are inclusive, so exactly
    /// 10.0 is winter. Anything that fails every bound (including NaN) is autumn.
    #[must_use]
    pub fn from_temperature(celsius: f64) -> Self {
        if celsius <= WINTER_MAX {
            Season::Winter
        } else if celsius <= SPRING_MAX {
            Season::Spring
        } else if celsius <= SUMMER_MAX {
            Season::Summer
        } else {
            Season::Autumn
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }

    /// Legend and marker styling for this season
    #[must_use]
    pub fn style(self) -> SeasonStyle {
        match self {
            Season::Winter => SeasonStyle {
                name: "Winter",
                color: "#06B6D4",
                icon: "❄️",
                temp_range: (-30, 10),
            },
            Season::Spring => SeasonStyle {
                name: "Spring",
                color: "#D946EF",
                icon: "🌱",
                temp_range: (10, 20),
            },
            Season::Summer => SeasonStyle {
                name: "Summer",
                color: "#F43F5E",
                icon: "☀️",
                temp_range: (20, 40),
            },
            // The legend range is the one the map has always shown; it is
            // not the classification range.
            Season::Autumn => SeasonStyle {
                name: "Autumn",
                color: "#E879F9",
                icon: "🍂",
                temp_range: (5, 18),
            },
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a season legend entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStyle {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub temp_range: (i32, i32),
}

/// Style of the "all seasons" legend entry
pub const ALL_SEASONS_STYLE: SeasonStyle = SeasonStyle {
    name: "All Seasons",
    color: "#0891B2",
    icon: "🌍",
    temp_range: (-30, 40),
};

/// Map filter: every city, or only those in one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Only(Season),
}

impl SeasonFilter {
    /// Query-string spelling, `"all"` or the season name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonFilter::All => "all",
            SeasonFilter::Only(season) => season.as_str(),
        }
    }

    /// Legend styling for this filter
    #[must_use]
    pub fn style(self) -> SeasonStyle {
        match self {
            SeasonFilter::All => ALL_SEASONS_STYLE,
            SeasonFilter::Only(season) => season.style(),
        }
    }

    #[must_use]
    pub fn matches(self, season: Season) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Only(wanted) => wanted == season,
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = SkycastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(SeasonFilter::All),
            "winter" => Ok(SeasonFilter::Only(Season::Winter)),
            "spring" => Ok(SeasonFilter::Only(Season::Spring)),
            "summer" => Ok(SeasonFilter::Only(Season::Summer)),
            "autumn" => Ok(SeasonFilter::Only(Season::Autumn)),
            other => Err(SkycastError::validation(format!(
                "Unknown season '{other}'. Must be one of: all, winter, spring, summer, autumn"
            ))),
        }
    }
}

/// Number of cities per season, plus the total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeasonCounts {
    pub all: usize,
    pub winter: usize,
    pub spring: usize,
    pub summer: usize,
    pub autumn: usize,
}

impl SeasonCounts {
    pub fn tally<I: IntoIterator<Item = Season>>(seasons: I) -> Self {
        let mut counts = Self::default();
        for season in seasons {
            counts.all += 1;
            match season {
                Season::Winter => counts.winter += 1,
                Season::Spring => counts.spring += 1,
                Season::Summer => counts.summer += 1,
                Season::Autumn => counts.autumn += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn get(&self, filter: SeasonFilter) -> usize {
        match filter {
            SeasonFilter::All => self.all,
            SeasonFilter::Only(Season::Winter) => self.winter,
            SeasonFilter::Only(Season::Spring) => self.spring,
            SeasonFilter::Only(Season::Summer) => self.summer,
            SeasonFilter::Only(Season::Autumn) => self.autumn,
        }
    }

    /// Legend rows: "all" first, then each season in order
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        std::iter::once(SeasonFilter::All)
            .chain(Season::ALL.into_iter().map(SeasonFilter::Only))
            .map(|filter| LegendEntry {
                key: filter.as_str(),
                style: filter.style(),
                count: self.get(filter),
            })
            .collect()
    }
}

/// One row of the map legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Value accepted by the `season` filter
    pub key: &'static str,
    #[serde(flatten)]
    pub style: SeasonStyle,
    pub count: usize,
}
