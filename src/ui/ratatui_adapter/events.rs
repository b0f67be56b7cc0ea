//! Event handling for the ratatui picker
//!
//! Maps key events to query edits or selector actions. Availability is not
//! checked here; the picker loop asks the engine before applying an action.

use super::state::{Mode, PickerState};
use crate::selector::SelectorAction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing for the loop to do beyond redrawing
    Continue,
    /// Forward an action to the engine
    Action(SelectorAction),
    /// The typed query changed and should be debounced
    QueryChanged,
    /// Leave the picker without a result
    Abort,
    /// No action taken
    Ignored,
}

/// Key labels shown for each action
#[must_use]
pub const fn action_keys(action: SelectorAction) -> &'static str {
    match action {
        SelectorAction::CursorUp => "↑/^P",
        SelectorAction::CursorDown => "↓/^N",
        SelectorAction::Submit => "Enter",
        SelectorAction::ToggleMark => "^T",
        SelectorAction::ToggleExclude => "^E",
    }
}

fn handle_normal_mode(state: &mut PickerState, key: KeyEvent) -> EventResult {
    let edited = |changed: bool| {
        if changed {
            EventResult::QueryChanged
        } else {
            EventResult::Ignored
        }
    };

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Action(SelectorAction::Submit),

        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
            EventResult::Action(SelectorAction::CursorUp)
        }
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            EventResult::Action(SelectorAction::CursorDown)
        }
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            EventResult::Action(SelectorAction::ToggleMark)
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            EventResult::Action(SelectorAction::ToggleExclude)
        }

        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => edited(state.query_backspace()),
        (KeyCode::Delete, _) => edited(state.query_delete()),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => edited(state.query_clear()),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => edited(state.query_delete_word()),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Dispatch one key event
pub fn handle_key(state: &mut PickerState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => {
            // Any key closes help
            state.mode = Mode::Normal;
            EventResult::Continue
        }
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut PickerState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_keys() {
        let mut state = PickerState::new("");
        for (event, action) in [
            (key(KeyCode::Down), SelectorAction::CursorDown),
            (ctrl('n'), SelectorAction::CursorDown),
            (key(KeyCode::Up), SelectorAction::CursorUp),
            (ctrl('p'), SelectorAction::CursorUp),
        ] {
            assert_eq!(handle_key(&mut state, event), EventResult::Action(action));
        }
    }

    #[test]
    fn test_action_keys() {
        let mut state = PickerState::new("");
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            EventResult::Action(SelectorAction::Submit)
        );
        assert_eq!(
            handle_key(&mut state, ctrl('t')),
            EventResult::Action(SelectorAction::ToggleMark)
        );
        assert_eq!(
            handle_key(&mut state, ctrl('e')),
            EventResult::Action(SelectorAction::ToggleExclude)
        );
    }

    #[test]
    fn test_abort_keys() {
        let mut state = PickerState::new("");
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Abort);
        assert_eq!(handle_key(&mut state, ctrl('c')), EventResult::Abort);
    }

    #[test]
    fn test_query_input() {
        let mut state = PickerState::new("");
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('P'))),
            EventResult::QueryChanged
        );
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT)
            ),
            EventResult::QueryChanged
        );
        assert_eq!(state.query, "PY");

        assert_eq!(handle_key(&mut state, ctrl('u')), EventResult::QueryChanged);
        assert_eq!(handle_key(&mut state, ctrl('u')), EventResult::Ignored);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Backspace)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let mut state = PickerState::new("");
        assert_eq!(handle_key(&mut state, key(KeyCode::F(1))), EventResult::Continue);
        assert_eq!(state.mode, Mode::Help);

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = PickerState::new("");
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut state, release), EventResult::Ignored);
        assert!(state.query.is_empty());
    }
}
