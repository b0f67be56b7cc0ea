//! Terminal front-ends for the selection engine
//!
//! The engine owns every selection decision. A front-end only renders what
//! the engine exposes and forwards user input into it:
//!
//! ```text
//! ┌──────────────────────────┐
//! │  commands (query/import) │
//! └────────────┬─────────────┘
//!              │ CasePicker::pick(&mut engine)
//!              ▼
//! ┌──────────────────────────┐      ┌──────────────────┐
//! │  RatatuiPicker           │ ───▶ │ SelectionEngine  │
//! │  (terminal, debounce)    │ ◀─── │ (events, state)  │
//! └──────────────────────────┘      └──────────────────┘
//! ```
//!
//! - [`CasePicker`]: drive an engine until submit or abort
//! - [`UserInput`]: line prompts used outside the picker

mod error;
mod traits;

pub mod input;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use input::{DialoguerInput, UserInput};
pub use ratatui_adapter::RatatuiPicker;
pub use traits::{CasePicker, PickOutcome};
