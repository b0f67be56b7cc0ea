//! Preview pane widget for the highlighted case

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Renders a case's Markdown preview text
///
/// Heading lines (`# ...`) are emphasised; everything else is shown as-is.
pub struct PreviewPane<'a> {
    content: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> PreviewPane<'a> {
    #[must_use]
    pub const fn new(content: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { content, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let Some(content) = self.content else {
            return vec![Line::styled("No case selected", self.theme.dimmed_style())];
        };
        content
            .lines()
            .map(|line| {
                if let Some(heading) = line.strip_prefix("# ") {
                    Line::styled(heading, self.theme.heading_style())
                } else {
                    Line::raw(line)
                }
            })
            .collect()
    }
}

impl Widget for PreviewPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Preview ");

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_marker_is_stripped() {
        let theme = Theme::default();
        let pane = PreviewPane::new(Some("# [1] Title\n\nBody"), &theme);
        let lines = pane.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "[1] Title");
        assert_eq!(lines[2].to_string(), "Body");
    }

    #[test]
    fn test_placeholder_without_case() {
        let theme = Theme::default();
        let lines = PreviewPane::new(None, &theme).lines();
        assert_eq!(lines[0].to_string(), "No case selected");
    }
}
