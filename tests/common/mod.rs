//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use recite::passage::{HistoryPolicy, Mode, SelectionEngine, SelectionMsg};
use recite::store::SaveRequest;
use recite::text::Unit;
use recite::update::update;

/// Seven CJK characters, each its own word unit (indices 0..=6)
pub const CJK_LINE: &str = "我爱北京天安门";

/// alpha0 ' '1 beta2 ','3 ' '4 gamma5 ' '6 delta7
pub const LATIN_LINE: &str = "alpha beta, gamma delta";

/// Create an engine with the default (coalesced) history policy
pub fn engine(text: &str) -> SelectionEngine {
    SelectionEngine::from_text(text, HistoryPolicy::Coalesced)
}

/// Create an engine with the legacy snapshot cadence
pub fn compatible_engine(text: &str) -> SelectionEngine {
    SelectionEngine::from_text(text, HistoryPolicy::Compatible)
}

/// Texts of a unit sequence
pub fn texts(units: &[Unit]) -> Vec<&str> {
    units.iter().map(|u| u.text.as_str()).collect()
}

/// Punctuation flags of a unit sequence
pub fn punctuation_flags(units: &[Unit]) -> Vec<bool> {
    units.iter().map(|u| u.is_punctuation).collect()
}

/// Drive a full drag from `start` to `end` in `mode` through `update`
pub fn drag(engine: &mut SelectionEngine, mode: Mode, start: usize, end: usize) {
    update(engine, SelectionMsg::SetMode(mode));
    update(engine, SelectionMsg::BeginDrag(start));
    update(engine, SelectionMsg::ContinueDrag(end));
    update(engine, SelectionMsg::EndDrag);
}

/// Group members by slot
pub fn group_indices(engine: &SelectionEngine) -> Vec<Vec<usize>> {
    engine
        .groups()
        .iter()
        .map(|g| g.indices().to_vec())
        .collect()
}

/// Save request for `text` with the given selection
pub fn save_request(text: &str, selected: Vec<usize>) -> SaveRequest {
    SaveRequest {
        title: recite::session::display_title(text, 50),
        original_text: text.to_string(),
        selected_word_indices: selected,
        highlight_groups: Vec::new(),
    }
}
