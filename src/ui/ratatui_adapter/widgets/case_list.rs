//! Case list widget for the visible cases

use crate::cases::Case;
use crate::selector::SelectionEngine;
use crate::ui::ratatui_adapter::highlight::Highlighter;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Renders the engine's visible cases with cursor, mark and match styling
pub struct CaseList<'a> {
    engine: &'a SelectionEngine,
    theme: &'a Theme,
    /// First visible row
    offset: usize,
    /// Query used for title highlighting
    query: &'a str,
}

impl<'a> CaseList<'a> {
    #[must_use]
    pub const fn new(engine: &'a SelectionEngine, theme: &'a Theme) -> Self {
        Self {
            engine,
            theme,
            offset: 0,
            query: "",
        }
    }

    /// Set scroll offset
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Highlight title characters matching `query`
    #[must_use]
    pub const fn highlight(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    fn title(&self) -> String {
        let visible = self.engine.visible_len();
        let total = self.engine.len();
        if self.engine.is_multi_select() {
            let marked = self.engine.marked_count();
            format!(" Cases ({visible}/{total}, {marked} marked) ")
        } else {
            format!(" Cases ({visible}/{total}) ")
        }
    }

    fn render_case(
        &self,
        case: &Case,
        is_cursor: bool,
        highlighter: &mut Highlighter,
    ) -> ListItem<'static> {
        let is_marked = self.engine.is_marked(&case.id);

        let text_style = if is_marked {
            self.theme.marked_style()
        } else if self.engine.is_excluded(&case.id) {
            self.theme.excluded_style()
        } else {
            Style::default()
        };

        let cursor_char = if is_cursor { ">" } else { " " };
        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
        ];
        if self.engine.is_multi_select() {
            let mark_char = if is_marked { "✓" } else { " " };
            spans.push(Span::styled(mark_char, self.theme.marked_style()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{}]", case.id),
            self.theme.id_style().patch(text_style),
        ));
        spans.push(Span::raw(" "));
        spans.extend(self.title_spans(&case.title, text_style, highlighter));
        if self.engine.is_excluded(&case.id) {
            spans.push(Span::styled(" (exists)", self.theme.dimmed_style()));
        }

        let item = ListItem::new(Line::from(spans));
        if is_cursor {
            item.style(self.theme.selected_style())
        } else {
            item
        }
    }

    fn title_spans(
        &self,
        title: &str,
        base: Style,
        highlighter: &mut Highlighter,
    ) -> Vec<Span<'static>> {
        let matched = highlighter.indices(title);
        if matched.is_empty() {
            return vec![Span::styled(title.to_string(), base)];
        }

        let highlight = base.patch(self.theme.match_style());
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_matched = false;
        for (i, c) in title.chars().enumerate() {
            let is_match = matched.binary_search(&i).is_ok();
            if is_match != run_matched && !run.is_empty() {
                let style = if run_matched { highlight } else { base };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_matched = is_match;
            run.push(c);
        }
        if !run.is_empty() {
            let style = if run_matched { highlight } else { base };
            spans.push(Span::styled(run, style));
        }
        spans
    }
}

impl Widget for CaseList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.engine.visible_len() == 0 {
            let message = if self.engine.is_empty() {
                "No cases"
            } else {
                "No matching cases"
            };
            Line::styled(message, self.theme.dimmed_style()).render(inner, buf);
            return;
        }

        let mut highlighter = Highlighter::new(self.query);
        let cursor = self.engine.cursor();
        let items: Vec<ListItem> = self
            .engine
            .visible()
            .enumerate()
            .skip(self.offset)
            .take(inner.height as usize)
            .map(|(row, case)| self.render_case(case, cursor == Some(row), &mut highlighter))
            .collect();

        List::new(items).render(inner, buf);
    }
}
