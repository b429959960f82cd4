//! Cities shown on the weather map

use serde::{Deserialize, Serialize};

/// A named city with coordinates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    /// City name as displayed
    pub name: String,
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Country code as displayed (mostly ISO 3166-1 alpha-2)
    pub country: String,
}

impl City {
    /// Create a new city
    #[must_use]
    pub fn new(name: &str, latitude: f64, longitude: f64, country: &str) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            country: country.to_string(),
        }
    }
}

/// The major world cities plotted on the map
#[must_use]
pub fn major_cities() -> Vec<City> {
    vec![
        City::new("New York", 40.7128, -74.006, "US"),
        City::new("London", 51.5074, -0.1278, "UK"),
        City::new("Tokyo", 35.6762, 139.6503, "JP"),
        City::new("Sydney", -33.8688, 151.2093, "AU"),
        City::new("Moscow", 55.7558, 37.6173, "RU"),
        City::new("Dubai", 25.2048, 55.2708, "AE"),
        City::new("Rio de Janeiro", -22.9068, -43.1729, "BR"),
        City::new("Cape Town", -33.9249, 18.4241, "ZA"),
        City::new("Mumbai", 19.076, 72.8777, "IN"),
        City::new("Beijing", 39.9042, 116.4074, "CN"),
        City::new("Paris", 48.8566, 2.3522, "FR"),
        City::new("Berlin", 52.52, 13.405, "DE"),
        City::new("Toronto", 43.6532, -79.3832, "CA"),
        City::new("Mexico City", 19.4326, -99.1332, "MX"),
        City::new("Singapore", 1.3521, 103.8198, "SG"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_cities() {
        let cities = major_cities();
        assert_eq!(cities.len(), 15);
        assert!(cities.iter().all(|c| (-90.0..=90.0).contains(&c.latitude)));
        assert!(cities.iter().all(|c| (-180.0..=180.0).contains(&c.longitude)));
        assert_eq!(cities[0].name, "New York");
    }

    #[test]
    fn test_serializes_short_coordinate_names() {
        let value = serde_json::to_value(City::new("Paris", 48.8566, 2.3522, "FR")).unwrap();
        assert_eq!(value["lat"], 48.8566);
        assert_eq!(value["country"], "FR");
    }
}
