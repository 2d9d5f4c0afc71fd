//! Recite - passage memorization with word selection and highlight groups
//!
//! This crate provides the core types and logic for tokenizing a passage,
//! marking words as memorized, grouping them into highlight groups, and
//! replaying the passage with memorized words hidden. State changes go
//! through an Elm-style `update` function.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod passage;
pub mod replay;
pub mod session;
pub mod store;
pub mod text;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ReciteConfig;
pub use passage::{HistoryPolicy, Mode, SelectionEngine, SelectionMsg};
pub use session::EditSession;
pub use store::{PassageStore, StoreError};
pub use text::{tokenize, Unit};
