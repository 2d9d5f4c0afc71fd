//! Message types for passage selection.

use super::drag::Mode;

/// Every input the selection engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMsg {
    // === Selecting ===
    /// Toggle one unit (click)
    ToggleClick(usize),
    /// Memorize every selectable unit
    SelectAll,
    /// Un-memorize every unit
    ClearSelection,

    // === Drag (both modes) ===
    /// Pointer pressed on a unit
    BeginDrag(usize),
    /// Pointer entered a unit while pressed
    ContinueDrag(usize),
    /// Pointer released
    EndDrag,

    // === Mode ===
    /// Switch to a specific mode
    SetMode(Mode),
    /// Flip between selecting and highlighting
    ToggleMode,

    // === History ===
    /// Restore the previous snapshot
    Undo,
}

impl SelectionMsg {
    /// Check if this message can change units or groups
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            SelectionMsg::ToggleClick(_)
                | SelectionMsg::SelectAll
                | SelectionMsg::ClearSelection
                | SelectionMsg::EndDrag
                | SelectionMsg::Undo
        )
    }

    /// Check if this message is part of a drag gesture
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            SelectionMsg::BeginDrag(_) | SelectionMsg::ContinueDrag(_) | SelectionMsg::EndDrag
        )
    }
}
