//! Interaction mode and in-flight drag state

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What a drag does when it ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Clicks toggle and drags memorize
    #[default]
    Selecting,
    /// Drags create highlight groups
    Highlighting,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Selecting => Mode::Highlighting,
            Mode::Highlighting => Mode::Selecting,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Selecting => "select",
            Mode::Highlighting => "highlight",
        }
    }
}

/// A drag in progress.
///
/// Carries the mode it was started in; switching modes drops the drag, so
/// this always matches the engine's current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub mode: Mode,
    pub start: usize,
    pub covered: BTreeSet<usize>,
}

impl DragState {
    pub fn new(mode: Mode, start: usize) -> Self {
        Self {
            mode,
            start,
            covered: BTreeSet::from([start]),
        }
    }

    /// Pressed and released on the same unit
    pub fn is_click(&self) -> bool {
        self.covered.len() == 1 && self.covered.contains(&self.start)
    }
}

/// Result of ending a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No drag was in progress
    Idle,
    /// Selecting-mode drag that never left its start unit
    Click { index: usize },
    /// Selecting-mode drag memorized the covered units
    Memorized { covered: usize },
    /// Highlighting-mode drag created a group
    Grouped { slot: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::Selecting.toggled(), Mode::Highlighting);
        assert_eq!(Mode::Highlighting.toggled(), Mode::Selecting);
        assert_eq!(Mode::default(), Mode::Selecting);
    }

    #[test]
    fn test_new_drag_is_click() {
        let mut drag = DragState::new(Mode::Selecting, 4);
        assert!(drag.is_click());
        drag.covered.insert(6);
        assert!(!drag.is_click());
    }
}
