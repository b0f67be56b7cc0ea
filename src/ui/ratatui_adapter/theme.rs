//! Color theme definitions for the ratatui picker

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for matched characters in titles
    pub match_highlight: Color,
    /// Color for the cursor indicator and key hints
    pub cursor: Color,
    /// Color for marked cases
    pub marked: Color,
    /// Color for cases that already exist in the store
    pub excluded: Color,
    /// Color for case ids
    pub id: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            match_highlight: Color::Yellow,
            cursor: Color::Cyan,
            marked: Color::Green,
            excluded: Color::DarkGray,
            id: Color::Magenta,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for matched characters
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for marked rows
    #[must_use]
    pub fn marked_style(&self) -> Style {
        Style::default()
            .fg(self.marked)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for rows that are in the exclude set but shown
    #[must_use]
    pub fn excluded_style(&self) -> Style {
        Style::default()
            .fg(self.excluded)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn id_style(&self) -> Style {
        Style::default().fg(self.id)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for preview headings
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }
}
