use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::Component;

use crate::action::Action;
use crate::theme::Theme;

pub struct Header;

pub struct HeaderProps<'a> {
    pub user: Option<&'a str>,
    pub dark_mode: bool,
    pub theme: &'a Theme,
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let mode = if props.dark_mode { "☾ Dark" } else { "☀ Light" };

        let mut spans = vec![
            Span::styled(" Weather Dashboard", theme.title()),
            Span::styled(format!("   {}", mode), theme.muted()),
        ];
        if let Some(user) = props.user {
            spans.push(Span::styled(format!("   {}", user), theme.muted()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
