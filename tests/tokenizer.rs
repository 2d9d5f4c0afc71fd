//! Tokenizer and unit classification tests

mod common;

use common::{punctuation_flags, texts};
use recite::text::{contains_cjk, is_actual_word, tokenize, width_of, UnitKind};

// ========================================================================
// Scenarios
// ========================================================================

#[test]
fn test_punctuation_split_from_words() {
    let units = tokenize("Hello, world!");
    assert_eq!(texts(&units), vec!["Hello", ",", " ", "world", "!"]);
    assert_eq!(
        punctuation_flags(&units),
        vec![false, true, true, false, true]
    );
}

#[test]
fn test_hyphenated_word_is_one_unit() {
    let units = tokenize("mother-in-law visited");
    assert_eq!(texts(&units), vec!["mother-in-law", " ", "visited"]);
    assert!(!units[0].is_punctuation);
    assert_eq!(units[0].kind(), UnitKind::Word);
}

#[test]
fn test_single_paragraph_break_between_lines() {
    let units = tokenize("line one\n\nline two");
    let breaks: Vec<usize> = units
        .iter()
        .filter(|u| u.is_paragraph_break)
        .map(|u| u.index)
        .collect();
    assert_eq!(breaks, vec![3]);
    assert_eq!(units[3].text, "");
    assert_eq!(texts(&units[..3]), vec!["line", " ", "one"]);
    assert_eq!(texts(&units[4..]), vec!["line", " ", "two"]);
}

// ========================================================================
// Properties over a fixed corpus
// ========================================================================

const CORPUS: &[&str] = &[
    "",
    "   ",
    "\n",
    "Hello, world!",
    "床前明月光，疑是地上霜。\n\n举头望明月，低头思故乡。",
    "ひらがな と カタカナ",
    "mix of 漢字 and latin-words, 123 numbers\r\n\r\nnext",
    "trailing hyphen- and --double",
    "emoji 🙂 and symbols @#$%",
];

#[test]
fn test_tokenize_is_idempotent() {
    for text in CORPUS {
        assert_eq!(tokenize(text), tokenize(text), "input {:?}", text);
    }
}

#[test]
fn test_index_matches_position() {
    for text in CORPUS {
        for (i, unit) in tokenize(text).iter().enumerate() {
            assert_eq!(unit.index, i, "input {:?}", text);
        }
    }
}

#[test]
fn test_fresh_units_carry_no_selection() {
    for text in CORPUS {
        for unit in tokenize(text) {
            assert!(!unit.is_memorized);
            assert_eq!(unit.highlight_group, None);
        }
    }
}

// ========================================================================
// Classification
// ========================================================================

#[test]
fn test_cjk_passage_classification() {
    let units = tokenize("床前明月光，疑是地上霜。");
    assert_eq!(units.len(), 12);
    // Fullwidth comma is selectable, the ideographic full stop is not
    assert!(!units[5].is_punctuation);
    assert!(units[11].is_punctuation);
    assert!(units[..5].iter().all(|u| !u.is_punctuation));
}

#[test]
fn test_kana_are_words() {
    let units = tokenize("ひらがなカタカナ");
    assert_eq!(units.len(), 8);
    assert!(units.iter().all(|u| !u.is_punctuation));
}

#[test]
fn test_breaks_are_not_selectable() {
    let units = tokenize("a\nb\n\nc");
    assert_eq!(units[1].kind(), UnitKind::LineBreak);
    assert_eq!(units[3].kind(), UnitKind::ParagraphBreak);
    assert!(units[1].is_punctuation);
    assert!(units[3].is_punctuation);
}

#[test]
fn test_is_actual_word() {
    assert!(is_actual_word("word"));
    assert!(is_actual_word("mother-in-law"));
    assert!(is_actual_word("2024"));
    assert!(is_actual_word("字"));
    assert!(is_actual_word("，"));
    assert!(!is_actual_word(","));
    assert!(!is_actual_word("-"));
    assert!(!is_actual_word(" "));
    assert!(!is_actual_word(""));
}

#[test]
fn test_width_helpers() {
    assert!(contains_cjk("abc字"));
    assert!(!contains_cjk("abc"));
    // Short tokens get a minimum width
    assert!((width_of("字") - 1.5).abs() < 1e-5);
    assert!((width_of("a") - 1.5).abs() < 1e-5);
    assert!((width_of("ab") - 3.0).abs() < 1e-5);
    // Longer tokens scale with character count
    assert!((width_of("abcdefghij") - 6.0).abs() < 1e-5);
    assert!((width_of("漢字漢字漢") - 6.0).abs() < 1e-5);
}
