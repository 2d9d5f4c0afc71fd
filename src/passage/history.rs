//! Undo history for passage editing.

use super::state::PassageState;

/// Strict stack of passage snapshots.
///
/// Every entry is an owned deep copy, so later edits to the live state can
/// never reach a pushed entry. Unbounded: a passage session is short-lived.
#[derive(Debug, Clone, Default)]
pub struct PassageHistory {
    undo_stack: Vec<PassageState>,
}

impl PassageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `state` onto the stack
    pub fn push(&mut self, state: &PassageState) {
        self.undo_stack.push(state.clone());
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<PassageState> {
        self.undo_stack.pop()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Get the number of snapshots on the stack
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
