use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::icons::{icon_for, IconKey};

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One reverse-geocoding result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// City, town or village
    pub locality: Option<String>,
    /// Province, state or county
    pub region: Option<String>,
}

impl PlaceCandidate {
    pub fn locality(name: impl Into<String>) -> Self {
        Self {
            locality: Some(name.into()),
            region: None,
        }
    }

    pub fn region(name: impl Into<String>) -> Self {
        Self {
            locality: None,
            region: Some(name.into()),
        }
    }

    /// Locality if non-blank, otherwise region if non-blank.
    pub fn best_name(&self) -> Option<&str> {
        non_blank(self.locality.as_deref()).or_else(|| non_blank(self.region.as_deref()))
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Human-readable place name shown in the city row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceName(String);

impl PlaceName {
    /// Placeholder used when geocoding yields no usable name.
    pub const UNKNOWN: &'static str = "Bilinmeyen Konum";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PlaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current conditions card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub condition: String,
    /// Relative humidity, percent
    pub humidity: u8,
    /// km/h
    pub wind_speed: u32,
    pub feels_like: i32,
}

/// Anything rendered as one forecast cell: a label, a temperature and an
/// icon derived from its condition label.
pub trait ForecastEntry {
    fn label(&self) -> String;
    fn condition(&self) -> &str;
    fn temperature(&self) -> i32;

    fn icon(&self) -> IconKey {
        icon_for(self.condition())
    }
}

/// Hourly forecast entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: NaiveTime,
    pub temperature: i32,
    pub condition: String,
}

impl ForecastEntry for HourlyForecast {
    fn label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    fn condition(&self) -> &str {
        &self.condition
    }

    fn temperature(&self) -> i32 {
        self.temperature
    }
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    pub day: String,
    pub temperature: i32,
    pub condition: String,
    pub high: i32,
    pub low: i32,
}

impl ForecastEntry for DayForecast {
    fn label(&self) -> String {
        self.day.clone()
    }

    fn condition(&self) -> &str {
        &self.condition
    }

    fn temperature(&self) -> i32 {
        self.temperature
    }
}

/// Detail tiles under the forecasts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCards {
    pub uv_index: String,
    pub visibility_km: u32,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

/// Complete weather data bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DayForecast>,
    pub info: InfoCards,
}

/// Location resolution errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    PositionUnavailable,
    #[error("Location provider error: {0}")]
    Provider(String),
    #[error("A location request is already in flight")]
    Busy,
}

impl LocationError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}

/// Weather data errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
