//! Turning passage text into addressable units
//!
//! - [`tokenize`]: text -> ordered [`Unit`] sequence
//! - [`script`]: table-driven character classification and placeholder widths

pub mod script;
mod tokenizer;
mod unit;

pub use script::{contains_cjk, is_actual_word, width_of, CharClass, CjkBlock};
pub use tokenizer::{tokenize, tokens, Token, TokenKind, Tokens};
pub use unit::{Unit, UnitKind};
