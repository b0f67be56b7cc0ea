//! Ratatui-based picker implementation

use super::events::{EventResult, action_keys, poll_and_handle};
use super::state::{Mode, PickerState};
use super::theme::Theme;
use super::widgets::{CaseList, HelpBar, HelpOverlay, KeyHint, PreviewPane, SearchBar};
use crate::cases::Case;
use crate::selector::{
    DEFAULT_DEBOUNCE, Debouncer, SelectionEngine, SelectionEvent, SelectorAction,
};
use crate::ui::error::Result;
use crate::ui::traits::{CasePicker, PickOutcome};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    text::Line,
};
use std::io::{self, Stderr};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long to wait for input before re-checking the debouncer
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Actions in help-bar order
const ACTIONS: [SelectorAction; 5] = [
    SelectorAction::CursorUp,
    SelectorAction::CursorDown,
    SelectorAction::Submit,
    SelectorAction::ToggleMark,
    SelectorAction::ToggleExclude,
];

/// Ratatui-based case picker
pub struct RatatuiPicker {
    theme: Theme,
    title: String,
    prompt: String,
    debounce: Duration,
}

impl RatatuiPicker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            title: "Your cases!".to_string(),
            prompt: ">".to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Set the header line
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the quiet period before typed queries are applied
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Hints for the actions the engine currently offers
    fn build_hints(engine: &SelectionEngine) -> Vec<KeyHint> {
        let mut hints: Vec<KeyHint> = ACTIONS
            .into_iter()
            .filter(|action| engine.is_available(*action))
            .map(|action| {
                let label = match action {
                    SelectorAction::ToggleExclude if engine.excluded_hidden() => "show existing",
                    SelectorAction::ToggleExclude => "hide existing",
                    other => other.label(),
                };
                KeyHint::new(action_keys(action), label)
            })
            .collect();
        hints.push(KeyHint::new("F1", "help"));
        hints
    }

    fn render(
        &self,
        frame: &mut Frame,
        engine: &SelectionEngine,
        state: &mut PickerState,
        preview: Option<&str>,
        hints: &[KeyHint],
        pending: bool,
    ) {
        let [header, content, search, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [list_area, preview_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(content);

        state.visible_height = list_area.height.saturating_sub(2) as usize;
        state.follow_cursor(engine.cursor());

        frame.render_widget(
            Line::styled(self.title.as_str(), self.theme.heading_style()).centered(),
            header,
        );
        frame.render_widget(
            CaseList::new(engine, &self.theme)
                .offset(state.scroll_offset)
                .highlight(engine.query()),
            list_area,
        );
        frame.render_widget(PreviewPane::new(preview, &self.theme), preview_area);
        frame.render_widget(
            SearchBar::new(&state.query, state.query_cursor, &self.prompt, &self.theme)
                .pending(pending),
            search,
        );

        let bar_hints = &hints[..hints.len().min(6)];
        frame.render_widget(HelpBar::new(bar_hints, &self.theme), help);

        if state.mode == Mode::Help {
            let actions = &hints[..hints.len().saturating_sub(1)];
            frame.render_widget(HelpOverlay::new(&self.theme, actions), frame.area());
        }
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        engine: &mut SelectionEngine,
    ) -> Result<PickOutcome> {
        let mut state = PickerState::new(engine.query());
        let mut debouncer = Debouncer::new(self.debounce);
        let mut preview = engine.current_selection().map(Case::preview);

        loop {
            if let Some(query) = debouncer.poll(Instant::now()) {
                engine.set_filter(query);
            }
            for event in engine.take_events() {
                if let SelectionEvent::Changed(case) = event {
                    preview = case.as_ref().map(Case::preview);
                }
            }

            let hints = Self::build_hints(engine);
            let pending = debouncer.is_pending();
            terminal.draw(|frame| {
                self.render(frame, engine, &mut state, preview.as_deref(), &hints, pending);
            })?;

            match poll_and_handle(&mut state, POLL_INTERVAL)? {
                EventResult::QueryChanged => debouncer.schedule(state.query.as_str(), Instant::now()),
                EventResult::Action(action) => {
                    if !engine.is_available(action) {
                        debug!(?action, "action unavailable");
                        continue;
                    }
                    if let Some(submission) = engine.apply(action) {
                        return Ok(PickOutcome::Submitted(submission));
                    }
                }
                EventResult::Abort => return Ok(PickOutcome::Aborted),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }
    }
}

impl Default for RatatuiPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CasePicker for RatatuiPicker {
    fn pick(&self, engine: &mut SelectionEngine) -> Result<PickOutcome> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, engine);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            warn!(error = %e, "terminal cleanup failed");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::SelectorConfig;
    use crate::testing::small_case_set;
    use std::collections::HashSet;

    fn keys(hints: &[KeyHint]) -> Vec<&str> {
        hints.iter().map(|h| h.action.as_str()).collect()
    }

    #[test]
    fn test_picker_creation() {
        let picker = RatatuiPicker::new()
            .with_title("Select cases to import")
            .with_debounce(Duration::from_millis(10));
        assert_eq!(picker.title, "Select cases to import");
        assert_eq!(picker.debounce, Duration::from_millis(10));
    }

    #[test]
    fn test_hints_only_list_available_actions() {
        let engine = SelectionEngine::new(SelectorConfig::new(small_case_set()));
        let hints = RatatuiPicker::build_hints(&engine);
        assert_eq!(keys(&hints), vec!["up", "down", "submit", "help"]);
    }

    #[test]
    fn test_hints_in_import_mode() {
        let mut engine = SelectionEngine::new(
            SelectorConfig::new(small_case_set())
                .with_multi_select(true)
                .with_excluded(HashSet::from(["1234".to_string()])),
        );
        let hints = RatatuiPicker::build_hints(&engine);
        assert_eq!(
            keys(&hints),
            vec!["up", "down", "submit", "mark/unmark", "show existing", "help"]
        );

        engine.toggle_exclude_visibility();
        let hints = RatatuiPicker::build_hints(&engine);
        assert!(keys(&hints).contains(&"hide existing"));
    }
}
