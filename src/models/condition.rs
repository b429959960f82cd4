//! Provider icon codes to display glyphs

/// Glyph for any icon code the table does not know
pub const DEFAULT_ICON: &str = "🌤️";

/// Map an OpenWeatherMap icon code (`"01d"`, `"10n"`, ...) to a glyph.
/// Unknown codes are not an error; they get [`DEFAULT_ICON`].
#[must_use]
pub fn condition_icon(code: &str) -> &'static str {
    match code {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" | "02n" => "⛅",
        "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" => "🌧️",
        "10d" | "10n" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "❄️",
        "50d" | "50n" => "🌫️",
        _ => DEFAULT_ICON,
    }
}
