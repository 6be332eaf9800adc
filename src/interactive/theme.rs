//! Color palettes for the TUI
//!
//! Every widget takes its colors from the `Theme` owned by the `App`, so a
//! theme switch restyles the whole screen on the next draw.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// A complete palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub bg: Color,
    pub fg: Color,
    pub cell_bg: Color,
    pub active_bg: Color,
    pub highlight: Color,
    pub muted: Color,
    pub success: Color,
    pub error: Color,
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            bg: Color::Rgb(0x2e, 0x2e, 0x2e),
            fg: Color::White,
            cell_bg: Color::Rgb(0x3e, 0x3e, 0x3e),
            active_bg: Color::Rgb(0x4a, 0x4a, 0x4a),
            highlight: Color::Rgb(0x4a, 0x9d, 0xff),
            muted: Color::Gray,
            success: Color::LightGreen,
            error: Color::LightRed,
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            name: ThemeName::Light,
            bg: Color::Rgb(0xf0, 0xf0, 0xf0),
            fg: Color::Black,
            cell_bg: Color::Rgb(0xe0, 0xe0, 0xe0),
            active_bg: Color::Rgb(0xd0, 0xd0, 0xd0),
            highlight: Color::Rgb(0x00, 0x78, 0xd7),
            muted: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
        }
    }

    #[must_use]
    pub const fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Switch to the other palette
    pub fn toggle(&mut self) {
        *self = Self::from_name(self.name.toggled());
    }

    /// Base style for panels
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Style of an unselected grid cell
    #[must_use]
    pub fn cell(&self) -> Style {
        Style::default().fg(self.fg).bg(self.cell_bg)
    }

    /// Style of a selected grid cell
    #[must_use]
    pub fn selected_cell(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of the cell under the cursor
    #[must_use]
    pub fn cursor_cell(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.active_bg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
