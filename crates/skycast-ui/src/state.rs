//! Application state - single source of truth
//!
//! Only the reducer mutates it; components receive `&AppState`.

use skycast_auth::AuthForm;
use skycast_weather::{FavoriteCities, ForecastEntry, MapLayer, TileUrls, WeatherReport};

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
}

/// Dashboard input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Favorites,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Favorites => Focus::Search,
        }
    }
}

/// What the dashboard does when first shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Startup {
    #[default]
    Locate,
    City(String),
}

/// Tile settings the map card needs
#[derive(Debug, Clone)]
pub struct MapSettings {
    pub urls: TileUrls,
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            urls: TileUrls {
                base_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                overlay_root: "https://tile.openweathermap.org/map".to_string(),
                api_key: String::new(),
            },
            zoom: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub screen: Screen,
    pub auth: AuthForm,
    /// Email of the signed-in user
    pub user: Option<String>,
    pub startup: Startup,

    pub city_input: String,
    pub focus: Focus,
    pub favorites: FavoriteCities,

    /// Last successful fetch; kept when a later fetch fails
    pub report: Option<WeatherReport>,
    /// `report.forecast` reduced to one entry per local day
    pub daily: Vec<ForecastEntry>,

    pub loading: bool,
    pub error: Option<&'static str>,
    pub dark_mode: bool,

    pub map_layer: MapLayer,
    pub map: MapSettings,

    /// Animation frame counter for the spinner
    pub tick_count: u32,
}

impl AppState {
    pub fn new(dark_mode: bool, startup: Startup, map: MapSettings) -> Self {
        Self {
            dark_mode,
            startup,
            map,
            ..Self::default()
        }
    }

    pub fn has_data(&self) -> bool {
        self.report.is_some()
    }
}
