//! View state for the ratatui picker
//!
//! Holds only what the terminal front-end needs on top of the selection
//! engine: the query being edited, the overlay mode and list scrolling.
//! Which cases are visible, marked or highlighted is always read from the
//! engine.

/// Current mode of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing and navigating
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Editable query line plus list viewport
#[derive(Debug)]
pub struct PickerState {
    /// Query text as typed (may be ahead of the engine's applied query)
    pub query: String,
    /// Byte offset of the cursor within `query`, always on a char boundary
    pub query_cursor: usize,
    pub mode: Mode,
    /// First list row drawn
    pub scroll_offset: usize,
    /// Height of the list viewport (set during render)
    pub visible_height: usize,
}

impl PickerState {
    /// Start with `query` already typed and the cursor at its end
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            query_cursor: query.len(),
            mode: Mode::Normal,
            scroll_offset: 0,
            visible_height: 20,
        }
    }

    /// Insert a character at the cursor
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Delete the character before the cursor; false when at the start
    pub fn query_backspace(&mut self) -> bool {
        let Some((idx, _)) = self.query[..self.query_cursor].char_indices().next_back() else {
            return false;
        };
        self.query.remove(idx);
        self.query_cursor = idx;
        true
    }

    /// Delete the character under the cursor; false when at the end
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        true
    }

    pub fn query_cursor_left(&mut self) {
        if let Some((idx, _)) = self.query[..self.query_cursor].char_indices().next_back() {
            self.query_cursor = idx;
        }
    }

    pub fn query_cursor_right(&mut self) {
        if let Some(c) = self.query[self.query_cursor..].chars().next() {
            self.query_cursor += c.len_utf8();
        }
    }

    /// Clear the query; false when it was already empty
    pub fn query_clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.query_cursor = 0;
        true
    }

    /// Delete the word before the cursor; false when nothing was removed
    pub fn query_delete_word(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let trimmed = self.query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |space| space + 1);
        self.query.drain(start..self.query_cursor);
        self.query_cursor = start;
        true
    }

    /// Keep the engine cursor inside the viewport
    pub const fn follow_cursor(&mut self, cursor: Option<usize>) {
        let Some(cursor) = cursor else {
            self.scroll_offset = 0;
            return;
        };
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if self.visible_height > 0 && cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = cursor + 1 - self.visible_height;
        }
    }
}
