//! Fuzzy case selection
//!
//! - [`scorer`]: partial-ratio scoring of a query against a case
//! - [`engine`]: visible list, cursor, marks and exclusions
//! - [`debounce`]: trailing debounce for query edits

pub mod debounce;
pub mod engine;
pub mod scorer;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use engine::{SelectionEngine, SelectionEvent, SelectorAction, SelectorConfig, Submission};
pub use scorer::{MATCH_THRESHOLD, QueryScorer};

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing::{case, case_map};
    use proptest::prelude::*;

    fn cases_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(("[a-z]{3,10}", "[a-z ]{0,20}"), 0..12)
    }

    fn build(entries: &[(String, String)], multi: bool) -> SelectionEngine {
        let cases = case_map(
            entries
                .iter()
                .enumerate()
                .map(|(i, (title, desc))| case(&format!("{i:04}"), title, desc, "")),
        );
        SelectionEngine::new(SelectorConfig::new(cases).with_multi_select(multi))
    }

    proptest! {
        #[test]
        fn cursor_is_none_iff_visible_empty(
            entries in cases_strategy(),
            query in "[a-z]{0,6}",
            moves in prop::collection::vec(-3isize..=3, 0..10),
        ) {
            let mut engine = build(&entries, false);
            engine.set_filter(query);
            for delta in moves {
                engine.move_cursor(delta);
                match engine.cursor() {
                    None => prop_assert_eq!(engine.visible_len(), 0),
                    Some(c) => prop_assert!(c < engine.visible_len()),
                }
            }
        }

        #[test]
        fn visible_preserves_case_set_order(
            entries in cases_strategy(),
            query in "[a-z]{0,6}",
        ) {
            let mut engine = build(&entries, false);
            engine.set_filter(query);
            let ids: Vec<String> = engine.visible().map(|c| c.id.clone()).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            prop_assert_eq!(ids, sorted);
        }

        #[test]
        fn empty_query_shows_everything(entries in cases_strategy()) {
            let mut engine = build(&entries, false);
            engine.set_filter("abc");
            engine.set_filter("");
            prop_assert_eq!(engine.visible_len(), entries.len());
        }

        #[test]
        fn double_mark_toggle_is_identity(
            entries in cases_strategy(),
            down in 0isize..12,
        ) {
            let mut engine = build(&entries, true);
            engine.move_cursor(down);
            let before = engine.marked_count();
            engine.toggle_mark();
            engine.toggle_mark();
            prop_assert_eq!(engine.marked_count(), before);
        }
    }
}
