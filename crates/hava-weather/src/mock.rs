//! Built-in sample weather shown on the screen. There is no live weather
//! source; the same bundle is displayed for every city.

use crate::types::{WeatherData, WeatherError};

const MOCK_WEATHER_JSON: &str = include_str!("../data/mock_weather.json");

/// # Errors
/// `Parse` if the embedded document does not match `WeatherData`.
pub fn mock_weather() -> Result<WeatherData, WeatherError> {
    Ok(serde_json::from_str(MOCK_WEATHER_JSON)?)
}
