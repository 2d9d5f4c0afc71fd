//! Passage state: the units plus highlight groups, snapshotted for undo

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::text::{tokenize, Unit};

/// A disjoint cluster of unit indices, sorted ascending and never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightGroup {
    indices: Vec<usize>,
}

impl HighlightGroup {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Units and highlight groups of one passage.
///
/// Cloning is a deep copy, which is what the history relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassageState {
    units: Vec<Unit>,
    groups: Vec<HighlightGroup>,
}

impl PassageState {
    /// Fresh state with no groups
    pub fn new(units: Vec<Unit>) -> Self {
        Self {
            units,
            groups: Vec::new(),
        }
    }

    /// Tokenize `text` into a fresh state
    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    /// Rebuild a state from units that may already carry selections and
    /// group slots.
    ///
    /// Flags that break the punctuation invariant are cleared. Groups are
    /// rebuilt in slot order and renumbered without gaps.
    pub fn from_units(mut units: Vec<Unit>) -> Self {
        let mut by_slot: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, unit) in units.iter_mut().enumerate() {
            unit.index = i;
            if unit.is_punctuation {
                unit.is_memorized = false;
                unit.highlight_group = None;
            } else if let Some(slot) = unit.highlight_group {
                by_slot.entry(slot).or_default().push(i);
            }
        }

        let mut state = Self::new(units);
        for members in by_slot.into_values() {
            state.push_group(members.into_iter().collect());
        }
        state
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn groups(&self) -> &[HighlightGroup] {
        &self.groups
    }

    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Unit>, Vec<HighlightGroup>) {
        (self.units, self.groups)
    }

    /// Check if the unit at `index` exists and can be selected
    pub fn is_selectable(&self, index: usize) -> bool {
        self.units.get(index).is_some_and(Unit::is_selectable)
    }

    /// Ascending indices of every memorized unit
    pub fn selected_indices(&self) -> Vec<usize> {
        self.units
            .iter()
            .filter(|u| u.is_memorized)
            .map(|u| u.index)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_memorized).count()
    }

    /// Selectable indices in the inclusive range between `a` and `b`
    pub fn selectable_range(&self, a: usize, b: usize) -> BTreeSet<usize> {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        (start..=end.min(self.units.len().saturating_sub(1)))
            .filter(|&i| self.is_selectable(i))
            .collect()
    }

    /// Indices in `candidates` that already belong to some group
    pub fn grouped_among(&self, candidates: &BTreeSet<usize>) -> Vec<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&i| self.units.get(i).is_some_and(|u| u.highlight_group.is_some()))
            .collect()
    }

    pub(crate) fn set_memorized(&mut self, index: usize, memorized: bool) -> bool {
        match self.units.get_mut(index) {
            Some(unit) if unit.is_selectable() && unit.is_memorized != memorized => {
                unit.is_memorized = memorized;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn toggle_memorized(&mut self, index: usize) -> bool {
        match self.units.get_mut(index) {
            Some(unit) if unit.is_selectable() => {
                unit.is_memorized = !unit.is_memorized;
                true
            }
            _ => false,
        }
    }

    /// Append a group at the next slot and stamp its members.
    ///
    /// Callers check selectability and overlap first.
    pub(crate) fn push_group(&mut self, members: BTreeSet<usize>) -> usize {
        let slot = self.groups.len();
        for &i in &members {
            self.units[i].highlight_group = Some(slot);
        }
        self.groups.push(HighlightGroup {
            indices: members.into_iter().collect(),
        });
        slot
    }
}
