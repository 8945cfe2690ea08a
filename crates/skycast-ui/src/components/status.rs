use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::Component;

use crate::action::Action;
use crate::theme::Theme;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Loading and error lines; either, both or neither may show
pub struct StatusLine;

pub struct StatusLineProps<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub tick_count: u32,
    pub theme: &'a Theme,
}

impl Component<Action> for StatusLine {
    type Props<'a> = StatusLineProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let mut spans = Vec::new();

        if props.loading {
            let spinner = SPINNERS[props.tick_count as usize % SPINNERS.len()];
            spans.push(Span::styled(
                format!(" {} Loading...", spinner),
                Style::default().fg(theme.accent),
            ));
        }
        if let Some(error) = props.error {
            spans.push(Span::styled(format!(" ⚠ {}", error), theme.error()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
