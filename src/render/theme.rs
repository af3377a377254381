//! Color theme for the board.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Items at rest
    pub item: Style,

    /// Focused item while idle
    pub focus: Style,

    /// Item being carried
    pub carried: Style,

    /// List border while it holds the carried item
    pub active_border: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            item: Style::default(),
            focus: Style::default().fg(Color::White).bg(Color::Blue),
            carried: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            active_border: Style::default().fg(Color::Yellow),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            item: Style::default(),
            focus: Style::default().add_modifier(Modifier::REVERSED),
            carried: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            active_border: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    pub fn item_style(&self, focused: bool, carried: bool) -> Style {
        match (focused, carried) {
            (_, true) => self.carried,
            (true, false) => self.focus,
            (false, false) => self.item,
        }
    }
}
