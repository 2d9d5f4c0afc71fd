//! Saved passage library
//!
//! Passages are kept newest first with a capacity limit. A passage can be
//! published under an opaque public id for read-only sharing.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

/// What an editing session hands over when saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub title: String,
    pub original_text: String,
    /// Ascending memorized unit indices
    pub selected_word_indices: Vec<usize>,
    /// Highlight group members by slot
    pub highlight_groups: Vec<Vec<usize>>,
}

/// What a public lookup returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedPassage {
    pub original_text: String,
    pub selected_word_indices: Vec<usize>,
}

/// A single entry in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPassage {
    pub id: Uuid,
    /// Display title derived from the text when saved
    pub title: String,
    pub original_text: String,
    pub selected_word_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight_groups: Vec<Vec<usize>>,
    /// Timestamp when saved (Unix epoch seconds)
    pub created_at: u64,
    /// Set once the passage has been published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<Uuid>,
}

impl SavedPassage {
    /// Create a new entry for the current time
    pub fn new(request: SaveRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title,
            original_text: request.original_text,
            selected_word_indices: request.selected_word_indices,
            highlight_groups: request.highlight_groups,
            created_at: now_epoch_secs(),
            public_id: None,
        }
    }

    /// The shape handed out by public lookups
    pub fn shared(&self) -> SharedPassage {
        SharedPassage {
            original_text: self.original_text.clone(),
            selected_word_indices: self.selected_word_indices.clone(),
        }
    }

    /// Get human-readable time since saved
    pub fn time_ago(&self) -> String {
        let now = now_epoch_secs();
        let diff = now.saturating_sub(self.created_at);

        if diff < 60 {
            "just now".to_string()
        } else if diff < 3600 {
            let mins = diff / 60;
            format!("{} min{} ago", mins, if mins == 1 { "" } else { "s" })
        } else if diff < 86400 {
            let hours = diff / 3600;
            format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
        } else if diff < 604800 {
            let days = diff / 86400;
            format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
        } else {
            let weeks = diff / 604800;
            format!("{} week{} ago", weeks, if weeks == 1 { "" } else { "s" })
        }
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent list of saved passages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Saved passages, most recent first
    pub entries: Vec<SavedPassage>,
}

impl Library {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a passage at the front, refusing once `capacity` entries exist
    pub fn insert(
        &mut self,
        request: SaveRequest,
        capacity: usize,
    ) -> Result<&SavedPassage, StoreError> {
        if self.entries.len() >= capacity {
            return Err(StoreError::CapacityExceeded { limit: capacity });
        }
        self.entries.insert(0, SavedPassage::new(request));
        Ok(&self.entries[0])
    }

    pub fn get(&self, id: Uuid) -> Result<&SavedPassage, StoreError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)
    }

    /// Remove a passage; its public id stops resolving too
    pub fn remove(&mut self, id: Uuid) -> Result<SavedPassage, StoreError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(self.entries.remove(idx))
    }

    /// Publish a passage, reusing its public id if it already has one
    pub fn publish(&mut self, id: Uuid) -> Result<Uuid, StoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(*entry.public_id.get_or_insert_with(Uuid::new_v4))
    }

    pub fn find_public(&self, public_id: Uuid) -> Result<SharedPassage, StoreError> {
        self.entries
            .iter()
            .find(|e| e.public_id == Some(public_id))
            .map(SavedPassage::shared)
            .ok_or(StoreError::NotFound)
    }
}
