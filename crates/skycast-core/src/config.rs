use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Environment variable that overrides `provider.api_key`
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const APP_DIR_NAME: &str = "skycast";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory (preferences and log live here)
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Weather provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Map tile settings
    #[serde(default)]
    pub map: MapConfig,

    /// Geolocation settings
    #[serde(default)]
    pub location: LocationConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenWeatherMap API key, sent as the `appid` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Provider base URL (no trailing path)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Unit system passed to the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            units: default_units(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Base map tile template with `{z}`, `{x}`, `{y}` placeholders
    #[serde(default = "default_base_tile_url")]
    pub base_tile_url: String,

    /// Weather overlay tile root; the layer name and `{z}/{x}/{y}.png` are appended
    #[serde(default = "default_overlay_tile_url")]
    pub overlay_tile_url: String,

    /// Zoom level used for the marker tile
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_base_tile_url() -> String {
    "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_overlay_tile_url() -> String {
    "https://tile.openweathermap.org/map".to_string()
}

fn default_zoom() -> u8 {
    5
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            base_tile_url: default_base_tile_url(),
            overlay_tile_url: default_overlay_tile_url(),
            zoom: default_zoom(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Fixed latitude; when set together with `longitude` the location service is skipped
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// How long to wait for the location service
    #[serde(default = "default_location_timeout_secs")]
    pub timeout_secs: u64,

    /// Desktop id announced to GeoClue
    #[serde(default = "default_desktop_id")]
    pub desktop_id: String,
}

fn default_location_timeout_secs() -> u64 {
    15
}

fn default_desktop_id() -> String {
    "skycast".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            timeout_secs: default_location_timeout_secs(),
            desktop_id: default_desktop_id(),
        }
    }
}

impl LocationConfig {
    /// Fixed position from config, if both coordinates are set
    pub fn fixed_position(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Spinner tick interval
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// City searched on startup when geolocation is not wanted
    #[serde(default)]
    pub default_city: Option<String>,
}

fn default_tick_ms() -> u64 {
    120
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            default_city: None,
        }
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            provider: ProviderConfig::default(),
            map: MapConfig::default(),
            location: LocationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file there if missing.
    /// `OPENWEATHER_API_KEY` overrides the stored key but is never written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_with_env_key(path, std::env::var(API_KEY_ENV).ok())
    }

    fn load_with_env_key(path: &Path, env_key: Option<String>) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str::<Config>(&contents)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::debug!("Wrote default config to {:?}", path);
            config
        };

        if let Some(key) = env_key.filter(|k| !k.is_empty()) {
            config.provider.api_key = key;
        }

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Errors fail the load with [`ConfigError::Invalid`]; warnings are
    /// returned for the caller to report once logging is up.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.provider.base_url, "provider.base_url", &mut result);
        self.validate_url(
            &self.map.overlay_tile_url,
            "map.overlay_tile_url",
            &mut result,
        );

        if self.provider.api_key.trim().is_empty() {
            result.add_warning(
                "provider.api_key",
                format!("No API key configured; set it in config.toml or {}", API_KEY_ENV),
            );
        }

        if self.provider.timeout_secs == 0 {
            result.add_error("provider.timeout_secs", "Timeout must be greater than 0");
        }

        if !self.map.base_tile_url.contains("{z}")
            || !self.map.base_tile_url.contains("{x}")
            || !self.map.base_tile_url.contains("{y}")
        {
            result.add_error(
                "map.base_tile_url",
                "Tile template must contain {z}, {x} and {y}",
            );
        }

        if self.map.zoom > 19 {
            result.add_warning("map.zoom", "Zoom above 19 is not served by most tile servers");
        }

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    result.add_error("location.latitude", "Latitude must be within -90..=90");
                }
                if !(-180.0..=180.0).contains(&lon) {
                    result.add_error("location.longitude", "Longitude must be within -180..=180");
                }
            }
            (Some(_), None) | (None, Some(_)) => {
                result.add_warning(
                    "location",
                    "Only one of latitude/longitude is set; fixed position ignored",
                );
            }
            (None, None) => {}
        }

        if self.location.timeout_secs == 0 {
            result.add_error("location.timeout_secs", "Timeout must be greater than 0");
        }

        if self.ui.tick_ms == 0 {
            result.add_error("ui.tick_ms", "Tick interval must be greater than 0");
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path of the log file inside the config directory
    pub fn log_path(&self) -> PathBuf {
        self.config_dir.join("skycast.log")
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir.join("config.toml"))
    }
}
