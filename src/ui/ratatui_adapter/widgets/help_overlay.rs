//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::KeyHint;

/// Centered help screen listing the available actions
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    /// Actions currently available, in display order
    actions: &'a [KeyHint],
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, actions: &'a [KeyHint]) -> Self {
        Self { theme, actions }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(
            title,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    fn help_line(&self, key: &str, desc: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), self.theme.cursor_style()),
            Span::raw(desc.to_string()),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default(), self.section("  Actions"), Line::default()];
        for hint in self.actions {
            lines.push(self.help_line(&hint.key, &hint.action));
        }
        lines.push(self.help_line("Esc/^C", "cancel"));

        lines.extend([
            Line::default(),
            self.section("  Search"),
            Line::default(),
            self.help_line("Type", "filter cases"),
            self.help_line("^U", "clear query"),
            self.help_line("^W", "delete word"),
            self.help_line("←/→", "move in query"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
        ]);
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
