//! Update function for the Elm-style architecture
//!
//! All selection state changes flow through [`update`].

use crate::commands::Cmd;
use crate::passage::{DragOutcome, SelectionEngine, SelectionMsg};
use crate::tracing::SelectionSnapshot;

/// Apply `msg` to `engine` and return the side effect for the front end
pub fn update(engine: &mut SelectionEngine, msg: SelectionMsg) -> Option<Cmd> {
    let before = SelectionSnapshot::from_engine(engine);

    let result = match msg {
        SelectionMsg::ToggleClick(index) => {
            engine.toggle_click(index);
            Some(Cmd::Redraw)
        }

        SelectionMsg::SelectAll => {
            engine.select_all();
            Some(Cmd::Redraw)
        }

        SelectionMsg::ClearSelection => {
            engine.clear_selection();
            Some(Cmd::Redraw)
        }

        SelectionMsg::BeginDrag(index) => {
            engine.begin_drag(index);
            engine.drag().map(|_| Cmd::Redraw)
        }

        SelectionMsg::ContinueDrag(index) => {
            engine.continue_drag(index);
            engine.drag().map(|_| Cmd::Redraw)
        }

        SelectionMsg::EndDrag => match engine.end_drag() {
            Ok(DragOutcome::Idle) => None,
            Ok(_) => Some(Cmd::Redraw),
            Err(err) => {
                tracing::info!(target: "selection", "{}", err);
                Some(Cmd::Notify(err.user_message().to_string()))
            }
        },

        SelectionMsg::SetMode(mode) => {
            engine.set_mode(mode);
            Some(Cmd::Redraw)
        }

        SelectionMsg::ToggleMode => {
            engine.toggle_mode();
            Some(Cmd::Redraw)
        }

        SelectionMsg::Undo => engine.undo().then_some(Cmd::Redraw),
    };

    let after = SelectionSnapshot::from_engine(engine);
    if let Some(diff) = before.diff(&after) {
        tracing::debug!(target: "selection", ?msg, "{}", diff);
    }

    result
}
