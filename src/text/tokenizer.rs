//! Passage tokenizer
//!
//! Scans text left to right, taking the first matching rule at each position:
//!
//! 1. `\r\n\r\n` or `\n\n` - paragraph break
//! 2. ASCII letters, optionally chained by single hyphens - word
//! 3. ASCII digits - word
//! 4. One CJK-family character
//! 5. One standard punctuation mark
//! 6. `\r\n` or `\n` - line break
//! 7. Any other visible character
//! 8. A run of whitespace that stops short of a line break

use super::script::{char_class, CharClass};
use super::unit::Unit;

/// Which rule produced a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ParagraphBreak,
    Word,
    Cjk,
    Punctuation,
    LineBreak,
    Symbol,
    Whitespace,
}

/// A borrowed slice of the source text with the rule that matched it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Iterator over the tokens of a text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

/// Scan `text` into borrowed tokens without building units
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { src: text, pos: 0 }
}

/// Split `text` into units, indexed in scan order
pub fn tokenize(text: &str) -> Vec<Unit> {
    tokens(text)
        .enumerate()
        .map(|(index, token)| Unit::from_token(token, index))
        .collect()
}

impl<'a> Tokens<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Byte length of the longest prefix of `s` whose chars satisfy `pred`
    fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
        s.char_indices()
            .find(|&(_, ch)| !pred(ch))
            .map_or(s.len(), |(i, _)| i)
    }

    /// Letters, then any number of `-letters` links
    fn latin_word_len(rest: &str) -> usize {
        let is_letter = |ch: char| ch.is_ascii_alphabetic();
        let mut len = Self::run_len(rest, is_letter);
        loop {
            let tail = &rest[len..];
            let Some(after_hyphen) = tail.strip_prefix('-') else {
                break;
            };
            let link = Self::run_len(after_hyphen, is_letter);
            if link == 0 {
                break;
            }
            len += 1 + link;
        }
        len
    }

    /// Whitespace up to, but not including, `\n` or `\r\n`
    fn whitespace_len(rest: &str) -> usize {
        let mut len = 0;
        for (i, ch) in rest.char_indices() {
            if !ch.is_whitespace() || ch == '\n' || rest[i..].starts_with("\r\n") {
                break;
            }
            len = i + ch.len_utf8();
        }
        len
    }

    fn scan(rest: &str) -> Option<(usize, TokenKind)> {
        if rest.starts_with("\r\n\r\n") {
            return Some((4, TokenKind::ParagraphBreak));
        }
        if rest.starts_with("\n\n") {
            return Some((2, TokenKind::ParagraphBreak));
        }

        let ch = rest.chars().next()?;
        let single = ch.len_utf8();
        let scanned = match char_class(ch) {
            CharClass::Latin => (Self::latin_word_len(rest), TokenKind::Word),
            CharClass::Digit => (Self::run_len(rest, |c| c.is_ascii_digit()), TokenKind::Word),
            CharClass::Cjk(_) => (single, TokenKind::Cjk),
            CharClass::Punctuation => (single, TokenKind::Punctuation),
            CharClass::Newline => (1, TokenKind::LineBreak),
            CharClass::Whitespace if rest.starts_with("\r\n") => (2, TokenKind::LineBreak),
            CharClass::Symbol => (single, TokenKind::Symbol),
            CharClass::Whitespace => (Self::whitespace_len(rest), TokenKind::Whitespace),
        };
        Some(scanned)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest();
        let (len, kind) = Self::scan(rest)?;
        debug_assert!(len > 0, "tokenizer must always make progress");
        self.pos += len;
        Some(Token {
            text: &rest[..len],
            kind,
        })
    }
}
