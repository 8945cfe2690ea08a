//! Screen components.
//!
//! Each component renders from its props only and leaves the framework's
//! default `handle_event`; input mapping lives in [`crate::input`].

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Block,
    Frame,
};
use tui_dispatch::Component;

use crate::state::{AppState, Screen};
use crate::theme::Theme;

pub mod current;
pub mod forecast;
pub mod header;
pub mod help_bar;
pub mod login;
pub mod map;
pub mod metrics_chart;
pub mod search;
pub mod status;

pub use current::{CurrentWeather, CurrentWeatherProps};
pub use forecast::{ForecastList, ForecastListProps};
pub use header::{Header, HeaderProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use login::{LoginForm, LoginFormProps};
pub use map::{WeatherMap, WeatherMapProps};
pub use metrics_chart::{MetricsChart, MetricsChartProps};
pub use search::{SearchBar, SearchBarProps};
pub use status::{StatusLine, StatusLineProps, SPINNERS};

/// Render the whole screen for `state` into `area`
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = Theme::for_mode(state.dark_mode);
    frame.render_widget(Block::default().style(theme.base()), area);

    match state.screen {
        Screen::Login => LoginForm.render(
            frame,
            area,
            LoginFormProps {
                form: &state.auth,
                theme: &theme,
            },
        ),
        Screen::Dashboard => render_dashboard(frame, area, state, &theme),
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [header_area, search_area, status_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    Header.render(
        frame,
        header_area,
        HeaderProps {
            user: state.user.as_deref(),
            dark_mode: state.dark_mode,
            theme,
        },
    );

    SearchBar.render(
        frame,
        search_area,
        SearchBarProps {
            input: &state.city_input,
            favorites: &state.favorites,
            focus: state.focus,
            theme,
        },
    );

    StatusLine.render(
        frame,
        status_area,
        StatusLineProps {
            loading: state.loading,
            error: state.error,
            tick_count: state.tick_count,
            theme,
        },
    );

    if let Some(report) = &state.report {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body_area);
        let [current_area, forecast_area] =
            Layout::vertical([Constraint::Length(11), Constraint::Min(0)]).areas(left);
        let [chart_area, map_area] =
            Layout::vertical([Constraint::Length(11), Constraint::Min(0)]).areas(right);

        CurrentWeather.render(
            frame,
            current_area,
            CurrentWeatherProps { report, theme },
        );
        ForecastList.render(
            frame,
            forecast_area,
            ForecastListProps {
                entries: &state.daily,
                theme,
            },
        );
        MetricsChart.render(
            frame,
            chart_area,
            MetricsChartProps {
                snapshot: &report.snapshot,
                theme,
            },
        );
        WeatherMap.render(
            frame,
            map_area,
            WeatherMapProps {
                snapshot: &report.snapshot,
                layer: state.map_layer,
                settings: &state.map,
                theme,
            },
        );
    }

    HelpBar.render(frame, help_area, HelpBarProps { theme });
}
