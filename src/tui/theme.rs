//! Colors and styles for the dashboard.
//!
//! Taiwan market convention: red marks a rise, green a fall, the reverse
//! of western charting colors.

use ratatui::style::{Color, Modifier, Style};

/// Color palette applied across every panel.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub rise: Color,
    pub fall: Color,
    pub warning: Color,
    pub danger: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            rise: Color::Red,
            fall: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Bold accent for panel titles.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Rising price or resistance level.
    pub fn up(&self) -> Style {
        Style::default().fg(self.rise)
    }

    /// Falling price or support level.
    pub fn down(&self) -> Style {
        Style::default().fg(self.fall)
    }

    /// Rise or fall style picked from a direction flag.
    pub fn for_change(&self, rising: bool) -> Style {
        if rising {
            self.up()
        } else {
            self.down()
        }
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Bold red, used by the status bar for failed fetches.
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary text such as volumes, timestamps, and key hints.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Bold emphasis for headline numbers.
    pub fn value(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
