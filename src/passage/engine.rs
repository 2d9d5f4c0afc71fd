//! Selection/highlight engine - owns one passage editing session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::{tokenize, Unit};

use super::drag::{DragOutcome, DragState, Mode};
use super::history::PassageHistory;
use super::state::{HighlightGroup, PassageState};

/// When history snapshots are pushed around drags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryPolicy {
    /// One snapshot per drag that actually changes state
    #[default]
    Coalesced,
    /// Legacy snapshot cadence: a selecting drag pushes twice (once even
    /// for a click), a highlighting drag pushes when it begins, even if it
    /// is later rejected
    Compatible,
}

/// A highlight drag touched units that already belong to a group
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selection overlaps an existing highlight group at {} unit(s)", conflicting.len())]
pub struct OverlapError {
    /// Covered indices that are already grouped, ascending
    pub conflicting: Vec<usize>,
}

impl OverlapError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> &'static str {
        "This selection overlaps with an existing highlight group."
    }
}

/// Click, drag, select-all and undo over a tokenized passage.
///
/// All operations are total: indices outside the passage are ignored, and
/// only a rejected highlight drag reports an error.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    state: PassageState,
    history: PassageHistory,
    mode: Mode,
    drag: Option<DragState>,
    policy: HistoryPolicy,
}

impl SelectionEngine {
    pub fn new(state: PassageState, policy: HistoryPolicy) -> Self {
        Self {
            state,
            history: PassageHistory::new(),
            mode: Mode::default(),
            drag: None,
            policy,
        }
    }

    /// Tokenize `text` and start a fresh session
    pub fn from_text(text: &str, policy: HistoryPolicy) -> Self {
        Self::new(PassageState::from_text(text), policy)
    }

    /// Re-tokenize `text` and re-apply saved selections.
    ///
    /// Indices that are out of range or name punctuation are dropped.
    pub fn resume(text: &str, selected: &[usize], policy: HistoryPolicy) -> Self {
        let mut state = PassageState::new(tokenize(text));
        let mut dropped = 0;
        for &index in selected {
            if state.is_selectable(index) {
                state.set_memorized(index, true);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(
                dropped,
                total = selected.len(),
                "Ignored saved indices that are not selectable words"
            );
        }
        Self::new(state, policy)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> &PassageState {
        &self.state
    }

    pub fn into_state(self) -> PassageState {
        self.state
    }

    pub fn units(&self) -> &[Unit] {
        self.state.units()
    }

    pub fn groups(&self) -> &[HighlightGroup] {
        self.state.groups()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Ascending indices of memorized units; the export used for saving
    pub fn selected_indices(&self) -> Vec<usize> {
        self.state.selected_indices()
    }

    pub fn selected_count(&self) -> usize {
        self.state.selected_count()
    }

    fn push_history(&mut self) {
        self.history.push(&self.state);
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Flip the memorized flag of one unit. Selecting mode only.
    ///
    /// A click on punctuation still records a history step but never
    /// changes the unit. Returns whether the unit flipped.
    pub fn toggle_click(&mut self, index: usize) -> bool {
        if self.mode != Mode::Selecting {
            tracing::debug!(index, "Click ignored outside selecting mode");
            return false;
        }
        if index >= self.state.len() {
            tracing::warn!(index, len = self.state.len(), "Click outside passage");
            return false;
        }
        self.push_history();
        self.state.toggle_memorized(index)
    }

    /// Start a drag on a selectable unit
    pub fn begin_drag(&mut self, index: usize) {
        if !self.state.is_selectable(index) {
            tracing::debug!(index, "Drag not started on unselectable unit");
            return;
        }
        if self.mode == Mode::Highlighting && self.policy == HistoryPolicy::Compatible {
            self.push_history();
        }
        self.drag = Some(DragState::new(self.mode, index));
    }

    /// Extend the current drag to `index`, skipping punctuation in between
    pub fn continue_drag(&mut self, index: usize) {
        let Some(start) = self.drag.as_ref().map(|d| d.start) else {
            return;
        };
        if index >= self.state.len() {
            tracing::debug!(index, "Drag moved outside passage");
            return;
        }
        let covered = self.state.selectable_range(start, index);
        if let Some(drag) = self.drag.as_mut() {
            drag.covered = covered;
        }
    }

    /// Finish the current drag. The drag state is always cleared.
    pub fn end_drag(&mut self) -> Result<DragOutcome, OverlapError> {
        let Some(drag) = self.drag.take() else {
            return Ok(DragOutcome::Idle);
        };
        match drag.mode {
            Mode::Selecting => Ok(self.finish_selection_drag(drag)),
            Mode::Highlighting => self.finish_highlight_drag(drag),
        }
    }

    fn finish_selection_drag(&mut self, drag: DragState) -> DragOutcome {
        let compatible = self.policy == HistoryPolicy::Compatible;
        if drag.is_click() {
            // The click itself is handled by toggle_click
            if compatible {
                self.push_history();
            }
            return DragOutcome::Click { index: drag.start };
        }

        self.push_history();
        if compatible {
            self.push_history();
        }
        for &index in &drag.covered {
            self.state.set_memorized(index, true);
        }
        DragOutcome::Memorized {
            covered: drag.covered.len(),
        }
    }

    fn finish_highlight_drag(&mut self, drag: DragState) -> Result<DragOutcome, OverlapError> {
        if drag.covered.is_empty() {
            return Ok(DragOutcome::Idle);
        }
        let conflicting = self.state.grouped_among(&drag.covered);
        if !conflicting.is_empty() {
            tracing::debug!(?conflicting, "Highlight drag rejected");
            return Err(OverlapError { conflicting });
        }

        if self.policy == HistoryPolicy::Coalesced {
            self.push_history();
        }
        let slot = self.state.push_group(drag.covered);
        Ok(DragOutcome::Grouped { slot })
    }

    /// Memorize every selectable unit. Returns how many changed.
    pub fn select_all(&mut self) -> usize {
        self.push_history();
        (0..self.state.len())
            .filter(|&i| self.state.set_memorized(i, true))
            .count()
    }

    /// Un-memorize every unit. Returns how many changed.
    pub fn clear_selection(&mut self) -> usize {
        self.push_history();
        (0..self.state.len())
            .filter(|&i| self.state.set_memorized(i, false))
            .count()
    }

    /// Restore the most recent snapshot. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.state = previous;
        self.drag = None;
        true
    }

    /// Switch modes, dropping any drag in progress
    pub fn set_mode(&mut self, mode: Mode) {
        self.drag = None;
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Re-create highlight groups persisted alongside a passage.
    ///
    /// Each group is validated like a drag; groups that are empty after
    /// dropping unselectable indices, or that overlap an earlier group, are
    /// skipped. No history is recorded. Returns how many were applied.
    pub fn apply_groups(&mut self, groups: &[Vec<usize>]) -> usize {
        let mut applied = 0;
        for (i, group) in groups.iter().enumerate() {
            let members: BTreeSet<usize> = group
                .iter()
                .copied()
                .filter(|&index| self.state.is_selectable(index))
                .collect();
            if members.is_empty() {
                tracing::warn!(group = i, "Skipped saved highlight group with no selectable units");
                continue;
            }
            if !self.state.grouped_among(&members).is_empty() {
                tracing::warn!(group = i, "Skipped saved highlight group that overlaps another");
                continue;
            }
            self.state.push_group(members);
            applied += 1;
        }
        applied
    }
}
