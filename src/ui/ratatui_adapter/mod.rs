//! Ratatui-based case picker
//!
//! Implements [`CasePicker`](crate::ui::CasePicker) with ratatui widgets and
//! crossterm input. The picker draws on stderr so stdout stays free for the
//! result.
//!
//! ```text
//! ┌ Cases (3/3) ────────────┐┌ Preview ──────────────┐
//! │> [1234] First Test Case ││[1234] First Test Case │
//! │  [5678] Second Test Case││                       │
//! │  [9999] Python Related  ││First description      │
//! └─────────────────────────┘└───────────────────────┘
//! ┌ Search ─────────────────────────────────────────┐
//! │> pyth│                                          │
//! └─────────────────────────────────────────────────┘
//! ↑/^P:up  ↓/^N:down  Enter:submit  F1:help
//! ```

mod events;
mod highlight;
mod picker;
mod state;
mod theme;
pub mod widgets;

pub use picker::RatatuiPicker;
pub use state::{Mode, PickerState};
pub use theme::Theme;
