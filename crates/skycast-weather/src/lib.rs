//! Weather data for SkyCast
//!
//! Fetches current conditions, the 5-day/3-hour forecast and the UV index
//! from OpenWeatherMap, reduces the forecast to one entry per day, locates
//! the user through the host location service and builds map tile URLs.

pub mod types;
pub mod favorites;
pub mod forecast;
pub mod location;
pub mod provider;
pub mod tiles;

pub use types::*;
pub use favorites::FavoriteCities;
pub use forecast::{daily_forecast, daily_forecast_local, FORECAST_DAYS};
pub use location::{get_current_location, LocationOptions};
pub use provider::{ProviderSettings, WeatherProvider};
pub use tiles::{tile_for, MapLayer, TileCoord, TileUrls, OVERLAY_OPACITY};
