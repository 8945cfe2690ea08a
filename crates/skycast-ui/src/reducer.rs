//! Reducer - (state, action) -> effects
//!
//! All state mutations happen here. Side effects are only described, as
//! [`Effect`]s, and carried out by the runtime.

use skycast_auth::AuthOutcome;
use skycast_core::AppError;
use skycast_weather::{daily_forecast_local, Query};
use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Screen, Startup};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Login / signup form =====
        Action::AuthInput(c) => {
            state.auth.insert_char(c);
            DispatchResult::changed()
        }

        Action::AuthBackspace => {
            state.auth.backspace();
            DispatchResult::changed()
        }

        Action::AuthFocusNext => {
            state.auth.focus_next();
            DispatchResult::changed()
        }

        Action::AuthToggleMode => {
            state.auth.toggle_mode();
            DispatchResult::changed()
        }

        Action::AuthSubmit => match state.auth.submit() {
            AuthOutcome::Authenticated { email, .. } => {
                state.user = Some(email);
                state.auth.password.clear();
                enter_dashboard(state)
            }
            AuthOutcome::Rejected(_) => DispatchResult::changed(),
        },

        Action::AuthSkip => enter_dashboard(state),

        // ===== City search and favorites =====
        Action::SearchInput(c) => {
            state.city_input.push(c);
            DispatchResult::changed()
        }

        Action::SearchBackspace => {
            state.city_input.pop();
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            let city = state.city_input.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            start_fetch(state, Query::City(city))
        }

        Action::SearchFavorite(index) => {
            let Some(city) = state.favorites.get(index).map(str::to_string) else {
                return DispatchResult::unchanged();
            };
            state.city_input = city.clone();
            start_fetch(state, Query::City(city))
        }

        Action::FavoriteAdd => {
            let city = state.city_input.trim().to_string();
            if state.favorites.add(&city) {
                state.city_input.clear();
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::FocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        // ===== Dashboard toggles =====
        Action::DarkModeToggle => {
            state.dark_mode = !state.dark_mode;
            DispatchResult::changed_with(Effect::PersistDarkMode(state.dark_mode))
        }

        Action::DarkModeDidFail(message) => {
            state.error = Some(message);
            DispatchResult::changed()
        }

        Action::MapLayerNext => {
            state.map_layer = state.map_layer.next();
            DispatchResult::changed()
        }

        // ===== Location =====
        Action::LocationRequest => DispatchResult::effect(Effect::Locate),

        Action::LocationDidResolve(coord) => start_fetch(state, Query::Coordinate(coord)),

        Action::LocationDidFail(e) => {
            state.error = Some(AppError::from(e).user_message());
            DispatchResult::changed()
        }

        // ===== Weather =====
        Action::WeatherDidLoad(report) => {
            state.daily = daily_forecast_local(&report.forecast);
            state.report = Some(*report);
            state.loading = false;
            state.error = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError(e) => {
            state.loading = false;
            state.error = Some(AppError::from(e).user_message());
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.loading {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is intercepted by the runtime before dispatch
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Show the dashboard and kick off the startup lookup
fn enter_dashboard(state: &mut AppState) -> DispatchResult<Effect> {
    state.screen = Screen::Dashboard;
    match state.startup.clone() {
        Startup::Locate => DispatchResult::changed_with(Effect::Locate),
        Startup::City(city) => {
            state.city_input = city.clone();
            start_fetch(state, Query::City(city))
        }
    }
}

fn start_fetch(state: &mut AppState, query: Query) -> DispatchResult<Effect> {
    state.loading = true;
    state.error = None;
    DispatchResult::changed_with(Effect::FetchWeather(query))
}
