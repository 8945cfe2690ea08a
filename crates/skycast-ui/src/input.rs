//! Terminal events to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_dispatch::{EventKind, EventOutcome};

use crate::action::Action;
use crate::state::{AppState, Focus, Screen};

/// Event mapper for the runtime: keys become actions, a resize redraws.
pub fn map_event(event: &EventKind, state: &AppState) -> EventOutcome<Action> {
    match event {
        EventKind::Key(key) => map_key(*key, state).into(),
        EventKind::Resize(_, _) => EventOutcome::needs_render(),
        _ => EventOutcome::ignored(),
    }
}

pub fn map_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return Some(Action::Quit);
    }

    match state.screen {
        Screen::Login => map_login_key(key, ctrl),
        Screen::Dashboard => map_dashboard_key(key, ctrl, state.focus),
    }
}

fn map_login_key(key: KeyEvent, ctrl: bool) -> Option<Action> {
    match key.code {
        KeyCode::Char('t') if ctrl => Some(Action::AuthToggleMode),
        KeyCode::Char(c) if !ctrl => Some(Action::AuthInput(c)),
        KeyCode::Backspace => Some(Action::AuthBackspace),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            Some(Action::AuthFocusNext)
        }
        KeyCode::Enter => Some(Action::AuthSubmit),
        _ => None,
    }
}

fn map_dashboard_key(key: KeyEvent, ctrl: bool, focus: Focus) -> Option<Action> {
    if ctrl {
        return match key.code {
            KeyCode::Char('d') => Some(Action::DarkModeToggle),
            KeyCode::Char('f') => Some(Action::FavoriteAdd),
            KeyCode::Char('l') => Some(Action::LocationRequest),
            KeyCode::Char('o') => Some(Action::MapLayerNext),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
        KeyCode::Enter => Some(Action::SearchSubmit),
        KeyCode::Char(c) => match focus {
            Focus::Search => Some(Action::SearchInput(c)),
            Focus::Favorites => c
                .to_digit(10)
                .filter(|d| *d >= 1)
                .map(|d| Action::SearchFavorite(d as usize - 1)),
        },
        KeyCode::Backspace if focus == Focus::Search => Some(Action::SearchBackspace),
        _ => None,
    }
}
