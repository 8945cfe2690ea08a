use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Weather condition categories mapped from OpenWeatherMap condition ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Drizzle,
    Rain,
    Thunderstorm,
    Snow,
    /// Mist, smoke, haze, dust, fog, sand, ash, squalls, tornado
    Atmosphere,
}

impl WeatherCondition {
    /// Convert an OpenWeatherMap condition id to a category
    /// See: https://openweathermap.org/weather-conditions
    pub fn from_owm_id(id: u32) -> Self {
        match id {
            200..=299 => Self::Thunderstorm,
            300..=399 => Self::Drizzle,
            500..=599 => Self::Rain,
            600..=699 => Self::Snow,
            700..=799 => Self::Atmosphere,
            800 => Self::Clear,
            801..=804 => Self::Clouds,
            _ => Self::Clear, // Unknown ids default to clear
        }
    }

    /// Get a human-readable category name
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Atmosphere => "Mist",
        }
    }

    /// Single-cell glyph for terminal display
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::Clouds => "☁",
            Self::Drizzle | Self::Rain => "☂",
            Self::Thunderstorm => "ϟ",
            Self::Snow => "❄",
            Self::Atmosphere => "≡",
        }
    }
}

/// Current conditions for one place and moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub place_name: String,
    pub coord: Coordinate,
    /// °C
    pub temperature: f64,
    /// %
    pub humidity: u8,
    /// m/s
    pub wind_speed: f64,
    /// hPa
    pub pressure: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub condition: WeatherCondition,
    /// Provider wording, e.g. "light rain"
    pub description: String,
    pub observed_at: DateTime<Utc>,
}

/// One 3-hour forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub condition: WeatherCondition,
    pub description: String,
}

/// UV index for the snapshot's coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvIndex {
    pub coord: Coordinate,
    pub value: f64,
}

/// Everything one fetch produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    /// Chronological 3-hour entries as delivered by the provider
    pub forecast: Vec<ForecastEntry>,
    pub uv_index: UvIndex,
    pub fetched_at: DateTime<Utc>,
}

/// What to fetch weather for
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    City(String),
    Coordinate(Coordinate),
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::City(name) => write!(f, "city {:?}", name),
            Query::Coordinate(c) => write!(f, "coordinate {}", c),
        }
    }
}

/// Position reported by the location service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coord: Coordinate,
    pub accuracy_meters: Option<f64>,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("Failed to parse {endpoint} response: {message}")]
    Parse {
        endpoint: &'static str,
        message: String,
    },
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
