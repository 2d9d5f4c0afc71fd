//! JSON file backed passage store

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{Library, PassageStore, SaveRequest, SavedPassage, SharedPassage, StoreError};

/// Store that keeps the library in a JSON file.
///
/// The file is read once on open and rewritten after every change. If the
/// write fails the in-memory library is rolled back, so a failed save leaves
/// the store exactly as it was.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    library: Library,
    capacity: usize,
}

impl JsonFileStore {
    /// Open the library at `path`; a missing file is an empty library
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, StoreError> {
        let path = path.into();
        let library = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                StoreError::Unavailable(format!("corrupt library {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No library at {}, starting empty", path.display());
                Library::new()
            }
            Err(e) => return Err(unavailable(&path, e)),
        };
        Ok(Self {
            path,
            library,
            capacity,
        })
    }

    /// Open the library in the default config location
    pub fn open_default(capacity: usize) -> Result<Self, StoreError> {
        let path = crate::config_paths::library_file()
            .ok_or_else(|| StoreError::Unavailable("No config directory available".to_string()))?;
        Self::open(path, capacity)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    fn write(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.library)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)
    }

    /// Apply `change` to the library and persist it, rolling back on failure
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Library, usize) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let backup = self.library.clone();
        let value = change(&mut self.library, self.capacity)?;
        if let Err(e) = self.write() {
            self.library = backup;
            tracing::warn!("Failed to write library {}: {}", self.path.display(), e);
            return Err(unavailable(&self.path, e));
        }
        tracing::info!("Saved library to {}", self.path.display());
        Ok(value)
    }
}

fn unavailable(path: &Path, e: io::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {}", path.display(), e))
}

impl PassageStore for JsonFileStore {
    fn list(&self) -> Result<Vec<SavedPassage>, StoreError> {
        Ok(self.library.entries.clone())
    }

    fn get(&self, id: Uuid) -> Result<SavedPassage, StoreError> {
        self.library.get(id).cloned()
    }

    fn save(&mut self, request: SaveRequest) -> Result<SavedPassage, StoreError> {
        self.commit(|library, capacity| library.insert(request, capacity).cloned())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.commit(|library, _| library.remove(id).map(|_| ()))
    }

    fn publish(&mut self, id: Uuid) -> Result<Uuid, StoreError> {
        self.commit(|library, _| library.publish(id))
    }

    fn fetch_public(&self, public_id: Uuid) -> Result<SharedPassage, StoreError> {
        self.library.find_public(public_id)
    }
}
