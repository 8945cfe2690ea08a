//! Centralized error types for SkyCast.
//!
//! Library crates keep their own detailed errors; everything that reaches
//! the UI is funnelled through [`AppError`], whose `user_message()` yields the
//! fixed strings shown on screen. Causes are never shown, only logged.

use thiserror::Error;

/// Shown for any failed weather, forecast or UV request.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";

/// Shown when the location service answered but could not produce a position.
pub const LOCATION_FAILED_MESSAGE: &str =
    "Unable to retrieve your location. Please search for a city.";

/// Shown when the host has no location service at all.
pub const LOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this host.";

/// Shown when the dark-mode preference could not be saved.
pub const PREFERENCE_FAILED_MESSAGE: &str = "Could not save your preferences.";

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Preference(_) => PREFERENCE_FAILED_MESSAGE,
        }
    }
}

/// Weather and location failures as the UI sees them.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Any of the three provider requests failed
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// The location service could not produce a position
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// No location service on this host
    #[error("Location service not supported")]
    LocationUnsupported,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::FetchFailed(_) => FETCH_FAILED_MESSAGE,
            WeatherError::LocationUnavailable(_) => LOCATION_FAILED_MESSAGE,
            WeatherError::LocationUnsupported => LOCATION_UNSUPPORTED_MESSAGE,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Could not read the configuration file.",
        }
    }
}

/// Preference store errors.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to write preferences: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}
