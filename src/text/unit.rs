//! The addressable unit produced by the tokenizer

use serde::{Deserialize, Serialize};

use super::script::is_actual_word;
use super::tokenizer::{Token, TokenKind};

/// Structural role of a unit, derived from its fixed flags and text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    Word,
    Punctuation,
    Whitespace,
    LineBreak,
    ParagraphBreak,
}

/// One token of a passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Literal text (empty for paragraph breaks)
    pub text: String,
    /// Position in scan order; equal to the unit's slot in the sequence
    pub index: usize,
    /// Marked for hiding during replay
    pub is_memorized: bool,
    /// Not selectable; fixed at creation
    pub is_punctuation: bool,
    /// Double newline marker; fixed at creation
    #[serde(default)]
    pub is_paragraph_break: bool,
    /// Slot of the highlight group this unit belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_group: Option<usize>,
}

impl Unit {
    /// Wrap a scanned token as the unit at `index`
    pub(crate) fn from_token(token: Token<'_>, index: usize) -> Self {
        match token.kind {
            TokenKind::ParagraphBreak => Self {
                text: String::new(),
                index,
                is_memorized: false,
                is_punctuation: true,
                is_paragraph_break: true,
                highlight_group: None,
            },
            TokenKind::LineBreak => Self::plain(token.text, index, true),
            _ => Self::plain(token.text, index, !is_actual_word(token.text)),
        }
    }

    fn plain(text: &str, index: usize, is_punctuation: bool) -> Self {
        Self {
            text: text.to_string(),
            index,
            is_memorized: false,
            is_punctuation,
            is_paragraph_break: false,
            highlight_group: None,
        }
    }

    /// Whether selection operations may touch this unit
    pub fn is_selectable(&self) -> bool {
        !self.is_punctuation
    }

    /// Whether this is a single line break (`\n` or `\r\n`)
    pub fn is_line_break(&self) -> bool {
        self.text == "\n" || self.text == "\r\n"
    }

    pub fn kind(&self) -> UnitKind {
        if self.is_paragraph_break {
            UnitKind::ParagraphBreak
        } else if self.is_line_break() {
            UnitKind::LineBreak
        } else if !self.is_punctuation {
            UnitKind::Word
        } else if self.text.chars().all(char::is_whitespace) {
            UnitKind::Whitespace
        } else {
            UnitKind::Punctuation
        }
    }
}
