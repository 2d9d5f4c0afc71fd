//! Script classification for tokenizing and sizing units
//!
//! All script knowledge lives in the static tables below. The tokenizer and
//! the width helper both go through [`char_class`] and [`cjk_block`] so the
//! two never disagree about what counts as CJK.

/// Unicode block families that the tokenizer treats as CJK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CjkBlock {
    /// CJK Unified Ideographs and extensions A through G
    Ideograph,
    /// Kanbun annotation marks
    Kanbun,
    /// Radicals supplement, Kangxi radicals, strokes, ideographic description
    Radical,
    /// CJK Symbols and Punctuation (U+3000..U+303F)
    Symbols,
    /// Hiragana and Katakana
    Kana,
    /// Halfwidth and Fullwidth Forms (U+FF00..U+FFEF)
    Fullwidth,
}

impl CjkBlock {
    /// Whether every character in the block reads as part of a word.
    ///
    /// Symbol and fullwidth blocks mix letters with punctuation, so those
    /// are decided per character.
    fn always_word(self) -> bool {
        !matches!(self, CjkBlock::Symbols | CjkBlock::Fullwidth)
    }
}

/// Inclusive code point ranges, sorted by start for binary search
const CJK_RANGES: &[(u32, u32, CjkBlock)] = &[
    (0x2E80, 0x2EFF, CjkBlock::Radical),    // CJK Radicals Supplement
    (0x2F00, 0x2FDF, CjkBlock::Radical),    // Kangxi Radicals
    (0x2FF0, 0x2FFF, CjkBlock::Radical),    // Ideographic Description Characters
    (0x3000, 0x303F, CjkBlock::Symbols),    // CJK Symbols and Punctuation
    (0x3040, 0x309F, CjkBlock::Kana),       // Hiragana
    (0x30A0, 0x30FF, CjkBlock::Kana),       // Katakana
    (0x3190, 0x319F, CjkBlock::Kanbun),     // Kanbun
    (0x31C0, 0x31EF, CjkBlock::Radical),    // CJK Strokes
    (0x3400, 0x4DBF, CjkBlock::Ideograph),  // Extension A
    (0x4E00, 0x9FFF, CjkBlock::Ideograph),  // Unified Ideographs
    (0xFF00, 0xFFEF, CjkBlock::Fullwidth),  // Halfwidth and Fullwidth Forms
    (0x20000, 0x2A6DF, CjkBlock::Ideograph), // Extension B
    (0x2A700, 0x2B73F, CjkBlock::Ideograph), // Extension C
    (0x2B740, 0x2B81F, CjkBlock::Ideograph), // Extension D
    (0x2B820, 0x2CEAF, CjkBlock::Ideograph), // Extension E
    (0x2CEB0, 0x2EBEF, CjkBlock::Ideograph), // Extension F
    (0x30000, 0x3134F, CjkBlock::Ideograph), // Extension G
];

/// Marks that always become their own punctuation unit
const STANDARD_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '\u{201C}', '\u{201D}',
    '\u{2018}', '\u{2019}',
];

/// Fullwidth marks that may be picked for memorizing like a word
pub const SELECTABLE_PUNCTUATION: &[char] = &['，', '（', '）', '？', '：', '！'];

/// Per-character weight for CJK text, in the same abstract unit as [`width_of`]
pub const CJK_CHAR_WIDTH: f32 = 1.2;
/// Per-character weight for everything else
pub const LATIN_CHAR_WIDTH: f32 = 0.6;
/// Minimum placeholder width for a single-character token
pub const MIN_SINGLE_CHAR_WIDTH: f32 = 1.5;
/// Minimum placeholder width for longer tokens
pub const MIN_TOKEN_WIDTH: f32 = 3.0;

/// Character class driving the tokenizer's rule selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `\n`
    Newline,
    /// Any other whitespace, including a lone `\r`
    Whitespace,
    /// ASCII letter
    Latin,
    /// ASCII decimal digit
    Digit,
    /// Character in one of the CJK block families
    Cjk(CjkBlock),
    /// One of the standard punctuation marks
    Punctuation,
    /// Anything else that is visible
    Symbol,
}

/// Look up the CJK block family of a character
pub fn cjk_block(ch: char) -> Option<CjkBlock> {
    let code = ch as u32;
    let idx = CJK_RANGES.partition_point(|&(_, end, _)| end < code);
    CJK_RANGES
        .get(idx)
        .filter(|&&(start, _, _)| start <= code)
        .map(|&(_, _, block)| block)
}

/// Classify a single character
pub fn char_class(ch: char) -> CharClass {
    if ch == '\n' {
        CharClass::Newline
    } else if ch.is_ascii_alphabetic() {
        CharClass::Latin
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else if let Some(block) = cjk_block(ch) {
        CharClass::Cjk(block)
    } else if STANDARD_PUNCTUATION.contains(&ch) {
        CharClass::Punctuation
    } else if ch.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Symbol
    }
}

/// Check if a character is in the CJK family
pub fn is_cjk(ch: char) -> bool {
    cjk_block(ch).is_some()
}

/// Check if a character can be part of a word unit
pub fn is_word_char(ch: char) -> bool {
    match char_class(ch) {
        CharClass::Latin | CharClass::Digit => true,
        CharClass::Cjk(block) => block.always_word() || ch.is_alphanumeric(),
        _ => false,
    }
}

/// Check if a character is one of the selectable fullwidth marks
pub fn is_selectable_punctuation(ch: char) -> bool {
    SELECTABLE_PUNCTUATION.contains(&ch)
}

/// Check whether a token is an actual word (and so selectable).
///
/// A token qualifies when it is one of the selectable marks, or when every
/// hyphen-separated segment is non-empty and made of word characters.
pub fn is_actual_word(token: &str) -> bool {
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if is_selectable_punctuation(ch) {
            return true;
        }
    }
    !token.is_empty()
        && token
            .split('-')
            .all(|segment| !segment.is_empty() && segment.chars().all(is_word_char))
}

/// Check if any character of the text is CJK
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Placeholder width for a hidden unit, in abstract layout units
pub fn width_of(text: &str) -> f32 {
    let len = text.chars().count();
    let char_width = if contains_cjk(text) {
        CJK_CHAR_WIDTH
    } else {
        LATIN_CHAR_WIDTH
    };
    let min_width = if len == 1 {
        MIN_SINGLE_CHAR_WIDTH
    } else {
        MIN_TOKEN_WIDTH
    };
    (len as f32 * char_width).max(min_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_sorted_and_disjoint() {
        for pair in CJK_RANGES.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{:x?} overlaps {:x?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_cjk_block_lookup() {
        assert_eq!(cjk_block('中'), Some(CjkBlock::Ideograph));
        assert_eq!(cjk_block('あ'), Some(CjkBlock::Kana));
        assert_eq!(cjk_block('カ'), Some(CjkBlock::Kana));
        assert_eq!(cjk_block('。'), Some(CjkBlock::Symbols));
        assert_eq!(cjk_block('，'), Some(CjkBlock::Fullwidth));
        assert_eq!(cjk_block('\u{20000}'), Some(CjkBlock::Ideograph));
        assert_eq!(cjk_block('\u{3134F}'), Some(CjkBlock::Ideograph));
        assert_eq!(cjk_block('a'), None);
        assert_eq!(cjk_block('\u{3100}'), None); // Bopomofo is not in the table
        assert_eq!(cjk_block('\u{31A0}'), None);
    }

    #[test]
    fn test_char_class() {
        assert_eq!(char_class('\n'), CharClass::Newline);
        assert_eq!(char_class('\r'), CharClass::Whitespace);
        assert_eq!(char_class('\t'), CharClass::Whitespace);
        assert_eq!(char_class('Q'), CharClass::Latin);
        assert_eq!(char_class('7'), CharClass::Digit);
        assert_eq!(char_class(','), CharClass::Punctuation);
        assert_eq!(char_class('“'), CharClass::Punctuation);
        assert_eq!(char_class('-'), CharClass::Symbol);
        assert_eq!(char_class('é'), CharClass::Symbol);
        // Ideographic space sits in the symbols block
        assert_eq!(char_class('\u{3000}'), CharClass::Cjk(CjkBlock::Symbols));
    }

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('9'));
        assert!(is_word_char('字'));
        assert!(is_word_char('ひ'));
        assert!(is_word_char('Ａ')); // fullwidth letter
        assert!(is_word_char('〇'));
        assert!(!is_word_char('。'));
        assert!(!is_word_char('【'));
        assert!(!is_word_char('，'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
    }

    #[test]
    fn test_is_actual_word() {
        assert!(is_actual_word("hello"));
        assert!(is_actual_word("mother-in-law"));
        assert!(is_actual_word("2024"));
        assert!(is_actual_word("字"));
        assert!(is_actual_word("，"));
        assert!(is_actual_word("！"));
        assert!(!is_actual_word(","));
        assert!(!is_actual_word("。"));
        assert!(!is_actual_word(""));
        assert!(!is_actual_word(" "));
        assert!(!is_actual_word("-"));
        assert!(!is_actual_word("well-"));
        assert!(!is_actual_word("a--b"));
    }

    #[test]
    fn test_width_of_latin() {
        assert_eq!(width_of("a"), MIN_SINGLE_CHAR_WIDTH);
        assert_eq!(width_of("ab"), MIN_TOKEN_WIDTH);
        assert!((width_of("memorization") - 12.0 * 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_width_of_cjk() {
        assert_eq!(width_of("字"), MIN_SINGLE_CHAR_WIDTH);
        assert_eq!(width_of("漢字"), MIN_TOKEN_WIDTH);
        assert!((width_of("漢字漢字") - 4.0 * 1.2).abs() < 1e-5);
        // One CJK char is enough to use the wide weight for the whole token
        assert!((width_of("abcd字") - 5.0 * 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_width_of_empty() {
        assert_eq!(width_of(""), MIN_TOKEN_WIDTH);
    }
}
