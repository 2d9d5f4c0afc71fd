//! Persistence for saved passages.
//!
//! [`PassageStore`] is what an editing session saves through: save with a
//! capacity cap, list, load, delete, and publish for read-only sharing.
//! [`MemoryStore`] keeps everything in memory; [`JsonFileStore`] persists
//! the same library as JSON in the config directory.
//!
//! Errors are reported as [`StoreError`] and never retried here.

mod file;
mod library;

use thiserror::Error;
use uuid::Uuid;

pub use file::JsonFileStore;
pub use library::{Library, SaveRequest, SavedPassage, SharedPassage};

/// Failure reported by a passage store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The library already holds its maximum number of passages
    #[error("storage limit reached ({limit} saved passages)")]
    CapacityExceeded { limit: usize },
    /// No passage with that id, or no passage published under that id
    #[error("passage not found")]
    NotFound,
    /// Reading or writing the backing storage failed
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::CapacityExceeded { limit } => format!(
                "Failed to save content. Storage limit reached ({} passages).",
                limit
            ),
            Self::NotFound => "Content not found.".to_string(),
            Self::Unavailable(msg) => format!("Storage is unavailable: {}", msg),
        }
    }
}

/// Storage of saved passages
pub trait PassageStore {
    /// All passages, most recent first
    fn list(&self) -> Result<Vec<SavedPassage>, StoreError>;

    fn get(&self, id: Uuid) -> Result<SavedPassage, StoreError>;

    /// Save a new passage; fails with `CapacityExceeded` when full
    fn save(&mut self, request: SaveRequest) -> Result<SavedPassage, StoreError>;

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;

    /// Publish a passage and return its public id
    fn publish(&mut self, id: Uuid) -> Result<Uuid, StoreError>;

    /// Look up a published passage by public id
    fn fetch_public(&self, public_id: Uuid) -> Result<SharedPassage, StoreError>;
}

/// In-memory store
#[derive(Debug, Clone)]
pub struct MemoryStore {
    library: Library,
    capacity: usize,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        Self::with_library(Library::new(), capacity)
    }

    pub fn with_library(library: Library, capacity: usize) -> Self {
        Self { library, capacity }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(crate::config::MAX_SAVED_PASSAGES)
    }
}

impl PassageStore for MemoryStore {
    fn list(&self) -> Result<Vec<SavedPassage>, StoreError> {
        Ok(self.library.entries.clone())
    }

    fn get(&self, id: Uuid) -> Result<SavedPassage, StoreError> {
        self.library.get(id).cloned()
    }

    fn save(&mut self, request: SaveRequest) -> Result<SavedPassage, StoreError> {
        self.library.insert(request, self.capacity).cloned()
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.library.remove(id).map(|_| ())
    }

    fn publish(&mut self, id: Uuid) -> Result<Uuid, StoreError> {
        self.library.publish(id)
    }

    fn fetch_public(&self, public_id: Uuid) -> Result<SharedPassage, StoreError> {
        self.library.find_public(public_id)
    }
}
