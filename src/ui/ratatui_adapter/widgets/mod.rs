//! Ratatui widgets for the case picker

mod case_list;
mod help_bar;
mod help_overlay;
mod preview_pane;
mod search_bar;

pub use case_list::CaseList;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use preview_pane::PreviewPane;
pub use search_bar::SearchBar;
