use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skycast_weather::FavoriteCities;
use tui_dispatch::Component;

use crate::action::Action;
use crate::state::Focus;
use crate::theme::Theme;

pub struct SearchBar;

pub struct SearchBarProps<'a> {
    pub input: &'a str,
    pub favorites: &'a FavoriteCities,
    pub focus: Focus,
    pub theme: &'a Theme,
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let [input_area, favorites_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let searching = props.focus == Focus::Search;
        let cursor = if searching { "▏" } else { "" };
        let input = Paragraph::new(Line::from(vec![
            Span::styled(props.input, Style::default().fg(theme.foreground)),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(searching))
                .title(Span::styled(" Enter city name ", theme.muted())),
        );
        frame.render_widget(input, input_area);

        let mut spans = vec![Span::styled(" Favorites: ", theme.muted())];
        if props.favorites.is_empty() {
            spans.push(Span::styled("none", theme.muted()));
        }
        for (i, city) in props.favorites.iter().enumerate() {
            if i < 9 {
                spans.push(Span::styled(format!("{} ", i + 1), theme.key()));
            }
            let style = if searching {
                Style::default().fg(theme.foreground)
            } else {
                Style::default().fg(theme.accent)
            };
            spans.push(Span::styled(city, style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), favorites_area);
    }
}
