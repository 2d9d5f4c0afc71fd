//! Memorization replay
//!
//! Shows a passage with memorized units hidden behind placeholders that the
//! user reveals one at a time.

use std::collections::BTreeSet;

use crate::text::{width_of, Unit, UnitKind};

/// Initial visibility of memorized units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplayStart {
    /// Every memorized unit starts hidden
    #[default]
    Covered,
    /// Every memorized unit starts visible
    Revealed,
}

impl ReplayStart {
    pub fn from_cover_flag(cover: bool) -> Self {
        if cover {
            ReplayStart::Covered
        } else {
            ReplayStart::Revealed
        }
    }
}

/// One renderable piece of a replayed passage
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    ParagraphBreak,
    LineBreak,
    /// Text that is never hidden
    Text(&'a str),
    /// A memorized unit behind a placeholder of the given width
    Hidden { index: usize, width: f32 },
    /// A memorized unit currently shown
    Revealed { index: usize, text: &'a str },
}

/// Replay state for one passage
#[derive(Debug, Clone)]
pub struct ReplayView {
    units: Vec<Unit>,
    memorized: BTreeSet<usize>,
    hidden: BTreeSet<usize>,
    read_only: bool,
}

impl ReplayView {
    pub fn new(units: Vec<Unit>, start: ReplayStart) -> Self {
        let memorized: BTreeSet<usize> = units
            .iter()
            .filter(|u| u.is_memorized)
            .map(|u| u.index)
            .collect();
        let hidden = match start {
            ReplayStart::Covered => memorized.clone(),
            ReplayStart::Revealed => BTreeSet::new(),
        };
        Self {
            units,
            memorized,
            hidden,
            read_only: false,
        }
    }

    /// Replay of a shared passage; saving is disabled
    pub fn public(units: Vec<Unit>, start: ReplayStart) -> Self {
        Self {
            read_only: true,
            ..Self::new(units, start)
        }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn can_save(&self) -> bool {
        !self.read_only
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.contains(&index)
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    pub fn memorized_count(&self) -> usize {
        self.memorized.len()
    }

    /// Flip visibility of a memorized unit. Returns whether it is now hidden,
    /// or `None` if the unit is not memorized.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if !self.memorized.contains(&index) {
            return None;
        }
        if self.hidden.remove(&index) {
            Some(false)
        } else {
            self.hidden.insert(index);
            Some(true)
        }
    }

    pub fn reveal_all(&mut self) {
        self.hidden.clear();
    }

    pub fn cover_all(&mut self) {
        self.hidden = self.memorized.clone();
    }

    /// Placeholder width of a hidden unit
    pub fn placeholder_width(&self, index: usize) -> Option<f32> {
        if !self.is_hidden(index) {
            return None;
        }
        self.units.get(index).map(|u| width_of(&u.text))
    }

    /// The passage as render segments, in unit order
    pub fn segments(&self) -> Vec<Segment<'_>> {
        self.units
            .iter()
            .map(|unit| match unit.kind() {
                UnitKind::ParagraphBreak => Segment::ParagraphBreak,
                UnitKind::LineBreak => Segment::LineBreak,
                _ if self.is_hidden(unit.index) => Segment::Hidden {
                    index: unit.index,
                    width: width_of(&unit.text),
                },
                _ if self.memorized.contains(&unit.index) => Segment::Revealed {
                    index: unit.index,
                    text: &unit.text,
                },
                _ => Segment::Text(&unit.text),
            })
            .collect()
    }
}
