//! Logging setup and selection state snapshots
//!
//! Console output goes to stderr so stdout stays clean for command output.
//! Filter it with `RUST_LOG`, for example:
//! - `RUST_LOG=selection=debug` for every selection state transition
//! - `RUST_LOG=recite::store=info` for library writes
//!
//! A second layer always writes debug-level logs to
//! `~/.config/recite/logs/recite.log`, rotated daily.

use tracing_appender::rolling;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::passage::{Mode, SelectionEngine};

const LOG_FILE: &str = "recite.log";

/// Install the global subscriber. Call once, at startup.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer())
        .init();
}

/// Debug-level layer writing to the daily log file, if the logs directory
/// can be created
fn file_layer<S>() -> Option<impl Layer<S>>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            return None;
        }
    };
    let layer = fmt::layer()
        .with_writer(rolling::daily(logs_dir, LOG_FILE))
        .with_ansi(false)
        .with_line_number(true)
        .with_filter(EnvFilter::new("debug"));
    Some(layer)
}

/// Lightweight snapshot of engine state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub mode: Mode,
    pub selected: usize,
    pub groups: usize,
    pub history: usize,
    /// Drag start and covered count
    pub drag: Option<(usize, usize)>,
}

impl SelectionSnapshot {
    pub fn from_engine(engine: &SelectionEngine) -> Self {
        Self {
            mode: engine.mode(),
            selected: engine.selected_count(),
            groups: engine.groups().len(),
            history: engine.history_len(),
            drag: engine.drag().map(|d| (d.start, d.covered.len())),
        }
    }

    /// Describe what changed from `self` to `other`, or `None` if nothing did
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!(
                "mode: {} → {}",
                self.mode.label(),
                other.mode.label()
            ));
        }
        if self.selected != other.selected {
            changes.push(format!("selected: {} → {}", self.selected, other.selected));
        }
        if self.groups != other.groups {
            changes.push(format!("groups: {} → {}", self.groups, other.groups));
        }
        if self.history != other.history {
            changes.push(format!("history: {} → {}", self.history, other.history));
        }
        match (self.drag, other.drag) {
            (None, Some((start, _))) => changes.push(format!("drag started at #{}", start)),
            (Some(_), None) => changes.push("drag ended".to_string()),
            (Some((_, before)), Some((_, after))) if before != after => {
                changes.push(format!("drag covers {} → {}", before, after))
            }
            _ => {}
        }

        (!changes.is_empty()).then(|| changes.join("; "))
    }
}
