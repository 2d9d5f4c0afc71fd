//! Command-line argument parsing
//!
//! Supports:
//! - Tokenizing a passage (plain listing or JSON)
//! - Saving a passage with selections and highlight groups
//! - Listing, showing, deleting saved passages
//! - Publishing a passage and replaying it by public id

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::passage::{Mode, SelectionMsg};

/// Memorize passages by hiding the words you pick
#[derive(Parser, Debug)]
#[command(
    name = "recite",
    version,
    about = "Memorize passages by hiding the words you pick"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Split a passage into units and print them
    Tokenize {
        /// Passage file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Print units as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a passage with the given selections
    Save {
        /// Passage file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Select every word
        #[arg(long)]
        select_all: bool,

        /// Toggle unit N (repeatable)
        #[arg(long = "select", value_name = "N")]
        select: Vec<usize>,

        /// Drag-select units A through B (repeatable)
        #[arg(long = "drag", value_name = "A-B", value_parser = parse_range)]
        drags: Vec<(usize, usize)>,

        /// Group units A through B into a highlight group (repeatable)
        #[arg(long = "group", value_name = "A-B", value_parser = parse_range)]
        groups: Vec<(usize, usize)>,
    },

    /// List saved passages, most recent first
    List,

    /// Replay a saved passage
    Show {
        id: Uuid,

        /// Start with every memorized word visible
        #[arg(long)]
        reveal: bool,
    },

    /// Delete a saved passage
    Delete { id: Uuid },

    /// Publish a saved passage and print its public id
    Publish { id: Uuid },

    /// Replay a published passage (read-only)
    Public {
        public_id: Uuid,

        /// Start with every memorized word visible
        #[arg(long)]
        reveal: bool,
    },
}

/// Parse an inclusive unit range written as `A-B` (or a single `N`)
pub fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid unit index '{}'", part.trim()))
    };
    match s.split_once('-') {
        Some((a, b)) => Ok((parse(a)?, parse(b)?)),
        None => {
            let n = parse(s)?;
            Ok((n, n))
        }
    }
}

impl Command {
    /// The selection messages a `save` invocation replays, in order:
    /// select-all, clicks, drags, then highlight groups
    pub fn selection_script(&self) -> Vec<SelectionMsg> {
        let Command::Save {
            select_all,
            select,
            drags,
            groups,
            ..
        } = self
        else {
            return Vec::new();
        };

        let mut script = Vec::new();
        if *select_all {
            script.push(SelectionMsg::SelectAll);
        }
        script.extend(select.iter().map(|&n| SelectionMsg::ToggleClick(n)));
        if !drags.is_empty() {
            script.push(SelectionMsg::SetMode(Mode::Selecting));
            script.extend(drags.iter().flat_map(|&range| drag_script(range)));
        }
        if !groups.is_empty() {
            script.push(SelectionMsg::SetMode(Mode::Highlighting));
            script.extend(groups.iter().flat_map(|&range| drag_script(range)));
        }
        script
    }
}

fn drag_script((start, end): (usize, usize)) -> [SelectionMsg; 3] {
    [
        SelectionMsg::BeginDrag(start),
        SelectionMsg::ContinueDrag(end),
        SelectionMsg::EndDrag,
    ]
}
