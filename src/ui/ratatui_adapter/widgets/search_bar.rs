//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in the query
    cursor: usize,
    prompt: &'a str,
    theme: &'a Theme,
    /// Query typed but not yet applied
    pending: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            prompt,
            theme,
            pending: false,
        }
    }

    /// Show that the query has not settled yet
    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pending { " Search … " } else { " Search " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let (before, after) = self
            .query
            .split_at(self.cursor.min(self.query.len()));

        let line = Line::from(vec![
            Span::styled(self.prompt, self.theme.dimmed_style()),
            Span::raw(" "),
            Span::raw(before),
            cursor,
            Span::raw(after),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
