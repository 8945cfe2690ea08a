use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skycast_weather::WeatherReport;
use tui_dispatch::Component;

use crate::action::Action;
use crate::theme::Theme;

/// Current conditions card
pub struct CurrentWeather;

pub struct CurrentWeatherProps<'a> {
    pub report: &'a WeatherReport,
    pub theme: &'a Theme,
}

fn local_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%H:%M").to_string()
}

impl Component<Action> for CurrentWeather {
    type Props<'a> = CurrentWeatherProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let snapshot = &props.report.snapshot;

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", label), theme.muted()),
                Span::styled(value, Style::default().fg(theme.foreground)),
            ])
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(
                        " {} {} · ",
                        snapshot.condition.glyph(),
                        snapshot.condition.description()
                    ),
                    theme.title(),
                ),
                Span::styled(
                    snapshot.description.clone(),
                    Style::default().fg(theme.foreground),
                ),
            ]),
            row("Temperature", format!("{:.1} °C", snapshot.temperature)),
            row("Humidity", format!("{} %", snapshot.humidity)),
            row("Wind Speed", format!("{:.1} m/s", snapshot.wind_speed)),
            row("Pressure", format!("{:.0} hPa", snapshot.pressure)),
            row("Sunrise", local_time(snapshot.sunrise)),
            row("Sunset", local_time(snapshot.sunset)),
            row("UV Index", format!("{:.1}", props.report.uv_index.value)),
        ];

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(false))
                .title(Span::styled(
                    format!(" Current Weather in {} ", snapshot.place_name),
                    theme.title(),
                )),
        );
        frame.render_widget(card, area);
    }
}
