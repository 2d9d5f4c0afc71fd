//! One passage editing session: the original text plus its selection engine.
//!
//! This is where the engine meets persistence. A session is started from
//! raw text or resumed from a saved/shared passage, and produces the
//! [`SaveRequest`] handed to a store.

use crate::passage::{HistoryPolicy, SelectionEngine};
use crate::replay::{ReplayStart, ReplayView};
use crate::store::{SaveRequest, SavedPassage, SharedPassage};

/// Title for a passage: the first `max_chars` characters, plus `...` when
/// the text is longer
pub fn display_title(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[derive(Debug, Clone)]
pub struct EditSession {
    original_text: String,
    engine: SelectionEngine,
}

impl EditSession {
    /// Start a fresh session over `text`
    pub fn new(text: impl Into<String>, policy: HistoryPolicy) -> Self {
        let original_text = text.into();
        let engine = SelectionEngine::from_text(&original_text, policy);
        Self {
            original_text,
            engine,
        }
    }

    /// Rebuild a session from persisted selections and (optional) groups
    pub fn resume(
        text: impl Into<String>,
        selected: &[usize],
        groups: &[Vec<usize>],
        policy: HistoryPolicy,
    ) -> Self {
        let original_text = text.into();
        let mut engine = SelectionEngine::resume(&original_text, selected, policy);
        if !groups.is_empty() {
            engine.apply_groups(groups);
        }
        Self {
            original_text,
            engine,
        }
    }

    pub fn from_saved(saved: &SavedPassage, policy: HistoryPolicy) -> Self {
        Self::resume(
            saved.original_text.clone(),
            &saved.selected_word_indices,
            &saved.highlight_groups,
            policy,
        )
    }

    /// Shared passages carry no group structure
    pub fn from_shared(shared: &SharedPassage, policy: HistoryPolicy) -> Self {
        Self::resume(
            shared.original_text.clone(),
            &shared.selected_word_indices,
            &[],
            policy,
        )
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SelectionEngine {
        &mut self.engine
    }

    /// Build the request for saving, or `None` when nothing is selected
    pub fn save_request(&self, title_chars: usize) -> Option<SaveRequest> {
        let selected = self.engine.selected_indices();
        if selected.is_empty() {
            return None;
        }
        Some(SaveRequest {
            title: display_title(&self.original_text, title_chars),
            original_text: self.original_text.clone(),
            selected_word_indices: selected,
            highlight_groups: self
                .engine
                .groups()
                .iter()
                .map(|g| g.indices().to_vec())
                .collect(),
        })
    }

    /// Replay of the current selection
    pub fn replay(&self, start: ReplayStart) -> ReplayView {
        ReplayView::new(self.engine.units().to_vec(), start)
    }

    /// Read-only replay, for passages fetched by public id
    pub fn public_replay(&self, start: ReplayStart) -> ReplayView {
        ReplayView::public(self.engine.units().to_vec(), start)
    }
}
