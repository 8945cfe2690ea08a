//! Actions
//!
//! Naming: the prefix names the area (`Auth`, `Search`, `Weather`, ...),
//! `Did` marks the result of a background task.

use skycast_weather::{Coordinate, WeatherReport};

use crate::services::WeatherServiceError;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Login / signup form =====
    AuthInput(char),
    AuthBackspace,
    AuthFocusNext,
    AuthToggleMode,
    AuthSubmit,
    /// Skip the form and open the dashboard
    AuthSkip,

    // ===== City search and favorites =====
    SearchInput(char),
    SearchBackspace,
    SearchSubmit,
    /// Search the favorite at this index
    SearchFavorite(usize),
    FavoriteAdd,
    FocusNext,

    // ===== Dashboard toggles =====
    DarkModeToggle,
    /// Saving the preference failed; carries the user-facing message
    DarkModeDidFail(&'static str),
    MapLayerNext,

    // ===== Location =====
    /// Ask the location service again
    LocationRequest,
    LocationDidResolve(Coordinate),
    LocationDidFail(WeatherServiceError),

    // ===== Weather =====
    WeatherDidLoad(Box<WeatherReport>),
    WeatherDidError(WeatherServiceError),

    // ===== Global =====
    /// Spinner tick
    Tick,
    Quit,
}
