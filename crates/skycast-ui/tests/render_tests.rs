//! Render tests against ratatui's TestBackend.

use chrono::{DateTime, Duration};
use ratatui::{backend::TestBackend, Frame, Terminal};
use skycast_auth::AuthMode;
use skycast_ui::components;
use skycast_ui::state::{AppState, Screen};
use skycast_weather::{
    daily_forecast_local, Coordinate, ForecastEntry, MapLayer, UvIndex, WeatherCondition,
    WeatherReport, WeatherSnapshot,
};

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    components::render(frame, area, state);
}

fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn report() -> WeatherReport {
    let start = DateTime::from_timestamp(1_710_072_000, 0).unwrap();
    let coord = Coordinate::new(52.52, 13.40);
    WeatherReport {
        snapshot: WeatherSnapshot {
            place_name: "Berlin".into(),
            coord,
            temperature: -3.5,
            humidity: 74,
            wind_speed: 5.2,
            pressure: 1021.0,
            sunrise: start,
            sunset: start,
            condition: WeatherCondition::Snow,
            description: "light snow".into(),
            observed_at: start,
        },
        forecast: (0..16)
            .map(|i| ForecastEntry {
                timestamp: start + Duration::hours(3 * i),
                temperature: -2.0,
                condition: WeatherCondition::Snow,
                description: "snow".into(),
            })
            .collect(),
        uv_index: UvIndex { coord, value: 0.4 },
        fetched_at: start,
    }
}

fn dashboard_with_data() -> AppState {
    let report = report();
    AppState {
        screen: Screen::Dashboard,
        daily: daily_forecast_local(&report.forecast),
        report: Some(report),
        ..AppState::default()
    }
}

#[test]
fn test_login_screen() {
    let output = render_to_string(&AppState::default(), 80, 24);

    assert!(output.contains("Login"));
    assert!(output.contains("Email"));
    assert!(output.contains("Password"));
    assert!(output.contains("Don't have an account?"));
}

#[test]
fn test_signup_screen_with_error() {
    let mut state = AppState::default();
    state.auth.mode = AuthMode::SignUp;
    state.auth.password = "hunter2".into();
    state.auth.submit();

    let output = render_to_string(&state, 80, 24);

    assert!(output.contains("Sign Up"));
    assert!(output.contains("Already have an account?"));
    assert!(output.contains("Please enter a valid email and password."));
    assert!(!output.contains("hunter2"), "password must be masked");
}

#[test]
fn test_dashboard_without_data_hides_cards() {
    let state = AppState {
        screen: Screen::Dashboard,
        loading: true,
        ..AppState::default()
    };

    let output = render_to_string(&state, 100, 30);

    assert!(output.contains("Loading..."));
    assert!(!output.contains("Current Weather in"));
    assert!(!output.contains("5-Day Forecast"));
}

#[test]
fn test_dashboard_shows_error_line() {
    let state = AppState {
        screen: Screen::Dashboard,
        error: Some("Failed to fetch data. Please try again."),
        ..AppState::default()
    };

    let output = render_to_string(&state, 100, 30);

    assert!(output.contains("Failed to fetch data. Please try again."));
    assert!(!output.contains("Loading..."));
}

#[test]
fn test_dashboard_with_data() {
    let output = render_to_string(&dashboard_with_data(), 160, 48);

    assert!(output.contains("Current Weather in Berlin"));
    assert!(output.contains("Snow · light snow"));
    assert!(output.contains("-3.5 °C"));
    assert!(output.contains("74 %"));
    assert!(output.contains("5.2 m/s"));
    assert!(output.contains("1021 hPa"));
    assert!(output.contains("Weather Data Chart"));
    assert!(output.contains("Weather Map"));
    assert!(output.contains("Standard Map"));
    assert!(output.contains("5-Day Forecast"));
}

#[test]
fn test_overlay_layer_shows_tile_url() {
    let mut state = dashboard_with_data();
    state.map_layer = MapLayer::Precipitation;

    let output = render_to_string(&state, 200, 48);

    assert!(output.contains("Precipitation"));
    assert!(output.contains("precipitation_new"));
}

#[test]
fn test_dark_mode_changes_background() {
    let light = dashboard_with_data();
    let dark = AppState {
        dark_mode: true,
        ..dashboard_with_data()
    };

    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|frame| draw(frame, &light)).unwrap();
    let light_bg = terminal.backend().buffer()[(0, 0)].bg;

    terminal.draw(|frame| draw(frame, &dark)).unwrap();
    let dark_bg = terminal.backend().buffer()[(0, 0)].bg;

    assert_ne!(light_bg, dark_bg);
}
