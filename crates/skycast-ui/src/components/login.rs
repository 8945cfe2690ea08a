use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skycast_auth::{AuthForm, Field};
use tui_dispatch::Component;

use crate::action::Action;
use crate::theme::Theme;

pub struct LoginForm;

pub struct LoginFormProps<'a> {
    pub form: &'a AuthForm,
    pub theme: &'a Theme,
}

impl LoginForm {
    const WIDTH: u16 = 48;
    const HEIGHT: u16 = 14;
}

impl Component<Action> for LoginForm {
    type Props<'a> = LoginFormProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let theme = props.theme;
        let form = props.form;

        let [row] = Layout::vertical([Constraint::Length(Self::HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Length(Self::WIDTH)])
            .flex(Flex::Center)
            .areas(row);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .title(Span::styled(format!(" {} ", form.mode.title()), theme.title()));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [email_area, password_area, error_area, submit_area, _, switch_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        render_field(
            frame,
            email_area,
            "Email",
            form.email.clone(),
            form.focus == Field::Email,
            theme,
        );
        render_field(
            frame,
            password_area,
            "Password",
            form.masked_password(),
            form.focus == Field::Password,
            theme,
        );

        if let Some(error) = form.error {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(error, theme.error()))).centered(),
                error_area,
            );
        }

        let submit = Line::from(vec![
            Span::styled("Enter", theme.key()),
            Span::styled(format!(" {}", form.mode.title()), theme.muted()),
        ])
        .centered();
        frame.render_widget(Paragraph::new(submit), submit_area);

        let (prompt, target) = form.mode.switch_prompt();
        let switch = Line::from(vec![
            Span::styled(format!("{} ", prompt), theme.muted()),
            Span::styled(target, theme.key()),
            Span::styled(" (Ctrl-t)", theme.muted()),
        ])
        .centered();
        frame.render_widget(Paragraph::new(switch), switch_area);
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: String,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "▏" } else { "" };
    let field = Paragraph::new(Line::from(vec![
        Span::styled(value, Style::default().fg(theme.foreground)),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(focused))
            .title(Span::styled(format!(" {} ", label), theme.muted())),
    );
    frame.render_widget(field, area);
}
