//! Side effects requested by the reducer and carried out by the runtime.

use skycast_weather::Query;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// One-shot position lookup
    Locate,
    /// Fetch the three provider responses
    FetchWeather(Query),
    /// Write the dark mode flag to the preference store
    PersistDarkMode(bool),
}
