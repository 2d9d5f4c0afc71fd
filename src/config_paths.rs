//! Where recite keeps its files
//!
//! Everything lives in one directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/recite/`, else `~/.config/recite/`
//! - Windows: `%APPDATA%\recite\`
//!
//! ```text
//! recite/
//!   config.yaml     user preferences
//!   library.json    saved passages
//!   logs/           daily rotated recite.log
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "recite";
const CONFIG_FILE: &str = "config.yaml";
const LIBRARY_FILE: &str = "library.json";
const LOGS_DIR: &str = "logs";

/// Base directory for recite, if the platform provides one
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

fn entry(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

pub fn config_file() -> Option<PathBuf> {
    entry(CONFIG_FILE)
}

pub fn library_file() -> Option<PathBuf> {
    entry(LIBRARY_FILE)
}

pub fn logs_dir() -> Option<PathBuf> {
    entry(LOGS_DIR)
}

/// Create the base directory (and `sub` below it, when given) and return it
fn ensure(sub: Option<&str>) -> Result<PathBuf, String> {
    let base = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    let dir = match sub {
        Some(name) => base.join(name),
        None => base,
    };
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}

pub fn ensure_config_dir() -> Result<PathBuf, String> {
    ensure(None)
}

pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    ensure(Some(LOGS_DIR))
}
