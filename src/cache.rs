//! Small persistent preferences stored under `.cache/`.
//!
//! The format is a tiny TOML file. Missing or unreadable files yield defaults;
//! write failures are logged and otherwise ignored to keep the UI responsive.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_DIR: &str = ".cache";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_sound_enabled() -> bool {
    false
}

impl Default for StoredPreferences {
    fn default() -> Self {
        StoredPreferences {
            sound_enabled: default_sound_enabled(),
        }
    }
}

pub fn preferences_path() -> PathBuf {
    Path::new(CACHE_DIR).join("preferences.toml")
}

pub fn load_preferences(path: &Path) -> StoredPreferences {
    let Ok(data) = fs::read_to_string(path) else {
        debug!(path = %path.display(), "No stored preferences; using defaults");
        return StoredPreferences::default();
    };
    match toml::from_str(&data) {
        Ok(prefs) => prefs,
        Err(err) => {
            warn!(path = %path.display(), "Ignoring invalid preferences file: {err}");
            StoredPreferences::default()
        }
    }
}

pub fn save_preferences(path: &Path, prefs: &StoredPreferences) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "Failed to create cache dir: {err}");
            return;
        }
    }
    let contents = match toml::to_string(prefs) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("Failed to serialize preferences: {err}");
            return;
        }
    };
    match fs::write(path, contents) {
        Ok(()) => debug!(path = %path.display(), ?prefs, "Saved preferences"),
        Err(err) => warn!(path = %path.display(), "Failed to write preferences: {err}"),
    }
}
