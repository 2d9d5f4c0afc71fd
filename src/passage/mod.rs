//! Selection and highlighting over a tokenized passage.
//!
//! # Architecture
//!
//! - [`PassageState`]: units plus highlight groups; the unit of undo
//! - [`PassageHistory`]: stack of deep-copied snapshots
//! - [`SelectionEngine`]: click, drag, select-all and undo in two [`Mode`]s
//! - [`SelectionMsg`]: message form of every engine operation
//!
//! # Example
//!
//! ```
//! use recite::passage::{HistoryPolicy, Mode, SelectionEngine};
//!
//! let mut engine = SelectionEngine::from_text("one two three", HistoryPolicy::default());
//! engine.toggle_click(0);
//!
//! engine.set_mode(Mode::Highlighting);
//! engine.begin_drag(2);
//! engine.continue_drag(4);
//! engine.end_drag().unwrap();
//!
//! assert_eq!(engine.selected_indices(), vec![0]);
//! assert_eq!(engine.groups()[0].indices(), &[2, 4]);
//! ```

mod drag;
mod engine;
mod history;
mod messages;
mod state;

pub use drag::{DragOutcome, DragState, Mode};
pub use engine::{HistoryPolicy, OverlapError, SelectionEngine};
pub use history::PassageHistory;
pub use messages::SelectionMsg;
pub use state::{HighlightGroup, PassageState};
