//! Benchmarks for tokenizing and selecting over passages
//!
//! Run with: cargo bench tokenize

use recite::passage::{HistoryPolicy, Mode, SelectionEngine};
use recite::text::{tokenize, width_of};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const LATIN: &str = "The quick brown fox jumps over the lazy dog, twice-removed.\n";
const CJK: &str = "床前明月光，疑是地上霜。举头望明月，低头思故乡。\n\n";

// ============================================================================
// Tokenizer
// ============================================================================

#[divan::bench(args = [10, 100, 1_000])]
fn tokenize_latin(lines: usize) {
    let text = LATIN.repeat(lines);
    divan::black_box(tokenize(divan::black_box(&text)));
}

#[divan::bench(args = [10, 100, 1_000])]
fn tokenize_cjk(lines: usize) {
    let text = CJK.repeat(lines);
    divan::black_box(tokenize(divan::black_box(&text)));
}

#[divan::bench(args = [10, 100, 1_000])]
fn placeholder_widths(lines: usize) {
    let units = tokenize(&format!("{}{}", LATIN, CJK).repeat(lines));
    let total: f32 = units.iter().map(|u| width_of(&u.text)).sum();
    divan::black_box(total);
}

// ============================================================================
// Engine
// ============================================================================

#[divan::bench(args = [10, 100, 1_000])]
fn select_all_then_undo(lines: usize) {
    let mut engine = SelectionEngine::from_text(&LATIN.repeat(lines), HistoryPolicy::Coalesced);
    engine.select_all();
    divan::black_box(engine.undo());
}

#[divan::bench(args = [10, 100, 1_000])]
fn highlight_drag_across_passage(lines: usize) {
    let mut engine = SelectionEngine::from_text(&CJK.repeat(lines), HistoryPolicy::Coalesced);
    let last = engine.units().len().saturating_sub(1);
    engine.set_mode(Mode::Highlighting);
    engine.begin_drag(0);
    engine.continue_drag(last);
    divan::black_box(engine.end_drag().ok());
}
