//! End-to-end normalization from provider-shaped JSON to dashboard view models

use chrono::Utc;
use rstest::rstest;
use serde_json::{Value, json};
use skycast::models::{
    MapSummary, SeasonFilter, aggregate_forecast_in, convert_visibility, convert_wind_speed,
    major_cities, normalize_current_in, normalize_current_json,
};
use skycast::openweather::{RawCurrentWeather, RawForecastResponse};
use skycast::{City, CityWeather, Season, SkycastError, UnitSystem, WindDirection};

/// Sunday 2023-11-12 00:00:00 UTC
const SUNDAY_MIDNIGHT: i64 = 1_699_747_200;
const THREE_HOURS: i64 = 10_800;

fn london_payload() -> Value {
    json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "base": "stations",
        "main": {
            "temp": 11.53, "feels_like": 10.91, "temp_min": 10.12, "temp_max": 12.64,
            "pressure": 1002, "humidity": 84
        },
        "visibility": 10000,
        "wind": { "speed": 5.14, "deg": 230 },
        "clouds": { "all": 75 },
        "dt": 1_699_963_200,
        "sys": { "type": 2, "id": 2_075_535, "country": "GB", "sunrise": 1_699_946_280, "sunset": 1_699_978_860 },
        "timezone": 0,
        "id": 2_643_743,
        "name": "London",
        "cod": 200
    })
}

fn forecast_payload(entries: usize) -> Value {
    let list: Vec<Value> = (0..entries)
        .map(|i| {
            let hour = (i % 8) as f64;
            json!({
                "dt": SUNDAY_MIDNIGHT + i as i64 * THREE_HOURS,
                "main": {
                    "temp": 10.0 + hour,
                    "temp_min": 8.0 + hour,
                    "temp_max": 12.0 + hour,
                    "humidity": 70
                },
                "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
                "pop": 0.25,
                "dt_txt": "2023-11-12 00:00:00"
            })
        })
        .collect();
    json!({ "cod": "200", "cnt": entries, "list": list, "city": { "name": "London", "country": "GB" } })
}

#[test]
fn test_current_conditions_from_full_payload() {
    let raw = RawCurrentWeather::from_value(&london_payload()).unwrap();
    let current = normalize_current_in(&raw, UnitSystem::Metric, &Utc).unwrap();

    assert_eq!(current.location, "London, GB");
    assert_eq!(current.temperature, 12);
    assert_eq!(current.feels_like, 11);
    assert_eq!(current.condition, "light rain");
    assert_eq!(current.humidity, 84);
    assert_eq!(current.wind_speed, 19);
    assert_eq!(current.wind_direction, WindDirection::Sw);
    assert_eq!(current.visibility, "10.0");
    assert_eq!(current.sunrise, "7:18 AM");
    assert_eq!(current.sunset, "4:21 PM");
    assert_eq!(current.icon, "🌦️");
    assert_eq!(current.high, 13);
    assert_eq!(current.low, 10);
    assert_eq!(current.clouds, 75);
}

#[test]
fn test_current_conditions_imperial_units() {
    let raw = RawCurrentWeather::from_value(&london_payload()).unwrap();
    let current = normalize_current_in(&raw, UnitSystem::Imperial, &Utc).unwrap();

    // 5.14 m/s * 2.237 = 11.498 mph
    assert_eq!(current.wind_speed, 11);
    assert_eq!(current.visibility, "6.2");
    assert_eq!(current.units, UnitSystem::Imperial);
}

#[test]
fn test_current_conditions_serialize_camel_case() {
    let current = normalize_current_json(&london_payload(), UnitSystem::Metric).unwrap();
    let value = serde_json::to_value(&current).unwrap();

    assert_eq!(value["feelsLike"], 11);
    assert_eq!(value["windSpeed"], 19);
    assert_eq!(value["windDirection"], "SW");
    assert_eq!(value["units"], "metric");
}

#[rstest]
#[case::missing_weather("weather")]
#[case::missing_main("main")]
#[case::missing_sys("sys")]
fn test_missing_sections_are_malformed(#[case] field: &str) {
    let mut payload = london_payload();
    payload.as_object_mut().unwrap().remove(field);

    let err = normalize_current_json(&payload, UnitSystem::Metric).unwrap_err();
    assert!(matches!(err, SkycastError::MalformedResponse { .. }), "{field}: {err}");
}

#[test]
fn test_empty_weather_array_is_malformed() {
    let mut payload = london_payload();
    payload["weather"] = json!([]);

    let err = normalize_current_json(&payload, UnitSystem::Metric).unwrap_err();
    assert!(matches!(err, SkycastError::MalformedResponse { .. }));
}

#[rstest]
#[case(40, 5)]
#[case(39, 5)]
#[case(16, 2)]
#[case(8, 1)]
#[case(3, 1)]
#[case(0, 0)]
fn test_forecast_day_count(#[case] entries: usize, #[case] days: usize) {
    let raw = RawForecastResponse::from_value(&forecast_payload(entries)).unwrap();
    let forecast = aggregate_forecast_in(&raw.list, &Utc).unwrap();
    assert_eq!(forecast.len(), days);
}

#[test]
fn test_forecast_window_extremes_and_labels() {
    let raw = RawForecastResponse::from_value(&forecast_payload(40)).unwrap();
    let forecast = aggregate_forecast_in(&raw.list, &Utc).unwrap();

    let labels: Vec<_> = forecast.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(labels, ["Today", "Mon", "Tue", "Wed", "Thu"]);

    for (day, window) in forecast.iter().zip(raw.list.chunks(8)) {
        assert!(day.high >= window[0].main.temp_max.round() as i64);
        assert_eq!(day.high, 19);
        assert_eq!(day.low, 8);
        assert_eq!(day.condition, "clear sky");
        assert_eq!(day.icon, "☀️");
        assert_eq!(day.precipitation, 25);
    }
}

#[test]
fn test_unit_conversions() {
    assert_eq!(convert_wind_speed(10.0, UnitSystem::Metric), 36);
    assert_eq!(convert_wind_speed(10.0, UnitSystem::Imperial), 22);
    assert_eq!(convert_visibility(10_000.0, UnitSystem::Metric), "10.0");
    assert_eq!(convert_visibility(1_609_340.0, UnitSystem::Imperial), "1000.0");
}

#[test]
fn test_wind_direction_is_periodic() {
    for degrees in 0..360 {
        let bearing = f64::from(degrees);
        let direction = WindDirection::from_degrees(bearing);
        assert!(WindDirection::ALL.contains(&direction));
        assert_eq!(direction, WindDirection::from_degrees(bearing + 360.0));
    }
}

#[rstest]
#[case(10.0, Season::Winter)]
#[case(10.1, Season::Spring)]
#[case(20.0, Season::Spring)]
#[case(40.0, Season::Summer)]
#[case(40.1, Season::Autumn)]
fn test_season_thresholds(#[case] celsius: f64, #[case] expected: Season) {
    assert_eq!(Season::from_temperature(celsius), expected);
}

#[test]
fn test_map_summary_from_city_payloads() {
    let temps = [("Moscow", -3.6), ("London", 11.53), ("Cairo", 24.0), ("Dubai", 33.2)];
    let cities: Vec<CityWeather> = temps
        .iter()
        .map(|(name, temp)| {
            let city = major_cities()
                .into_iter()
                .find(|c| c.name == *name)
                .unwrap_or_else(|| City::new(name, 0.0, 0.0, "XX"));
            let mut payload = london_payload();
            payload["name"] = json!(name);
            payload["main"]["temp"] = json!(temp);
            let raw = RawCurrentWeather::from_value(&payload).unwrap();
            CityWeather::from_current(city, &raw).unwrap()
        })
        .collect();

    let summary = MapSummary::build(cities, SeasonFilter::Only(Season::Spring));

    assert_eq!(summary.counts.all, 4);
    assert_eq!(summary.counts.winter, 1);
    assert_eq!(summary.counts.spring, 1);
    assert_eq!(summary.counts.summer, 2);
    assert_eq!(summary.cities.len(), 1);
    assert_eq!(summary.cities[0].city.name, "London");
    assert_eq!(summary.cities[0].category, "rain");
    // (-4 + 12 + 24 + 33) / 4 = 16.25
    assert_eq!(summary.average_temperature, 16);

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["filter"], "spring");
    assert_eq!(value["cities"][0]["lat"], 51.5074);
}
