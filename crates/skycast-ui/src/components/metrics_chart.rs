use ratatui::{
    layout::{Direction, Rect},
    style::Style,
    text::Span,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use skycast_weather::WeatherSnapshot;
use tui_dispatch::Component;

use crate::action::Action;
use crate::theme::Theme;

/// Bar chart of temperature, humidity and wind speed
pub struct MetricsChart;

pub struct MetricsChartProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub theme: &'a Theme,
}

/// Bar heights are integers; scale so one decimal survives
const SCALE: f64 = 10.0;

/// Height for `value`; negatives draw as empty bars
pub fn bar_height(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value * SCALE).round() as u64
    } else {
        0
    }
}

/// The three metrics in chart order
pub fn chart_values(snapshot: &WeatherSnapshot) -> [(&'static str, f64); 3] {
    [
        ("Temperature", snapshot.temperature),
        ("Humidity", f64::from(snapshot.humidity)),
        ("Wind Speed", snapshot.wind_speed),
    ]
}

impl Component<Action> for MetricsChart {
    type Props<'a> = MetricsChartProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;

        let bars: Vec<Bar> = chart_values(props.snapshot)
            .into_iter()
            .map(|(label, value)| {
                Bar::default()
                    .label(label.into())
                    .value(bar_height(value))
                    .text_value(format!("{:.1}", value))
                    .style(Style::default().fg(theme.bar))
                    .value_style(Style::default().fg(theme.background).bg(theme.bar))
            })
            .collect();

        let chart = BarChart::default()
            .direction(Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .label_style(theme.muted())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border(false))
                    .title(Span::styled(" Weather Data Chart ", theme.title())),
            );
        frame.render_widget(chart, area);
    }
}
