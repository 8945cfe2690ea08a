use chrono::Local;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use skycast_weather::ForecastEntry;
use tui_dispatch::Component;

use crate::action::Action;
use crate::theme::Theme;

/// "5-Day Forecast" table: one row per day
pub struct ForecastList;

pub struct ForecastListProps<'a> {
    pub entries: &'a [ForecastEntry],
    pub theme: &'a Theme,
}

impl Component<Action> for ForecastList {
    type Props<'a> = ForecastListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let text = Style::default().fg(theme.foreground);

        let header = Row::new(["Date", "Temperature", "Description"]).style(theme.title());
        let rows = props.entries.iter().map(|entry| {
            Row::new([
                Cell::from(
                    entry
                        .timestamp
                        .with_timezone(&Local)
                        .format("%a %d %b")
                        .to_string(),
                ),
                Cell::from(format!("{:.1} °C", entry.temperature)),
                Cell::from(format!("{} {}", entry.condition.glyph(), entry.description)),
            ])
            .style(text)
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(11),
                Constraint::Length(12),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(false))
                .title(Span::styled(" 5-Day Forecast ", theme.title())),
        );
        frame.render_widget(table, area);
    }
}
