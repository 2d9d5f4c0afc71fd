//! User configuration persistence
//!
//! Stores preferences in `~/.config/recite/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::passage::HistoryPolicy;

/// Default cap on saved passages
pub const MAX_SAVED_PASSAGES: usize = 30;
/// Default number of characters of the passage used as its title
pub const TITLE_CHARS: usize = 50;

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReciteConfig {
    /// When undo snapshots are taken around drags
    #[serde(default)]
    pub history_policy: HistoryPolicy,
    /// Maximum number of passages the library keeps
    #[serde(default = "default_max_saved")]
    pub max_saved_passages: usize,
    /// Length of the title derived from a passage's text
    #[serde(default = "default_title_chars")]
    pub title_chars: usize,
    /// Start replay with every memorized unit hidden
    #[serde(default = "default_cover_on_start")]
    pub cover_on_start: bool,
}

fn default_max_saved() -> usize {
    MAX_SAVED_PASSAGES
}

fn default_title_chars() -> usize {
    TITLE_CHARS
}

fn default_cover_on_start() -> bool {
    true
}

impl Default for ReciteConfig {
    fn default() -> Self {
        Self {
            history_policy: HistoryPolicy::default(),
            max_saved_passages: default_max_saved(),
            title_chars: default_title_chars(),
            cover_on_start: default_cover_on_start(),
        }
    }
}

impl ReciteConfig {
    /// Load `~/.config/recite/config.yaml`; anything unusable yields defaults
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory, using default config");
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file is silent; an unreadable or invalid
    /// one is logged. Either way the result is the default config.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        serde_yaml::from_str(&content)
            .inspect(|_| tracing::info!("Loaded config from {}", path.display()))
            .unwrap_or_else(|e| {
                tracing::warn!("Invalid config {}: {}", path.display(), e);
                Self::default()
            })
    }

    /// Write to the default location, creating the directory
    pub fn save(&self) -> Result<(), String> {
        let dir = crate::config_paths::ensure_config_dir()?;
        self.save_to(&dir.join("config.yaml"))
    }

    /// Write to `path`, creating missing parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let yaml =
            serde_yaml::to_string(self).map_err(|e| format!("Cannot encode config: {}", e))?;
        path.parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|()| std::fs::write(path, yaml))
            .map_err(|e| format!("Cannot write config {}: {}", path.display(), e))?;
        tracing::info!("Wrote config to {}", path.display());
        Ok(())
    }
}
