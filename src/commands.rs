//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the front end should perform after an
//! update.

/// Side effect requested by [`crate::update::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Passage state, mode or drag changed; redraw
    Redraw,
    /// Show a message to the user (nothing else changed)
    Notify(String),
}

impl Cmd {
    /// Check if this command asks for a redraw
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}
