use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::Component;

use crate::action::Action;
use crate::theme::Theme;

pub struct HelpBar;

pub struct HelpBarProps<'a> {
    pub theme: &'a Theme,
}

const BINDINGS: [(&str, &str); 8] = [
    ("Enter", "search"),
    ("Tab", "focus"),
    ("1-9", "favorite"),
    ("^f", "add favorite"),
    ("^l", "locate"),
    ("^o", "layer"),
    ("^d", "dark mode"),
    ("Esc", "quit"),
];

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let spans: Vec<Span> = BINDINGS
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {}", key), theme.key()),
                    Span::styled(format!(" {} ", label), theme.muted()),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
