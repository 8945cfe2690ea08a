//! Light and dark palettes.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub bar: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(235, 240, 250),
        foreground: Color::Rgb(20, 20, 40),
        muted: Color::Rgb(100, 100, 120),
        accent: Color::Rgb(75, 30, 133),
        border: Color::Rgb(150, 140, 190),
        error: Color::Rgb(190, 30, 45),
        bar: Color::Rgb(75, 30, 133),
    };

    pub const DARK: Theme = Theme {
        background: Color::Rgb(29, 29, 29),
        foreground: Color::Rgb(230, 230, 235),
        muted: Color::Rgb(140, 140, 150),
        accent: Color::Rgb(160, 120, 230),
        border: Color::Rgb(80, 70, 110),
        error: Color::Rgb(240, 90, 90),
        bar: Color::Rgb(160, 120, 230),
    };

    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_palette() {
        assert_eq!(Theme::for_mode(true), Theme::DARK);
        assert_eq!(Theme::for_mode(false), Theme::LIGHT);
        assert_ne!(Theme::DARK.background, Theme::LIGHT.background);
    }
}
