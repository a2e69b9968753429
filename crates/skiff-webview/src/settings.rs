//! View Settings
//!
//! TOML-backed preferences. The view only reads and writes one key: the
//! default zoom level index under `[preferences]`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zoom::{DEFAULT_ZOOM_INDEX, ZOOM_LEVELS};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    zoom_level: Option<usize>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    preferences: Preferences,
}

/// Persistent view preferences
#[derive(Debug)]
pub struct Settings {
    path: PathBuf,
    doc: Document,
}

impl Settings {
    /// Load settings from a TOML file. A missing file yields defaults;
    /// a malformed one is logged and treated as empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(doc) => doc,
                Err(e) => {
                    log::warn!("ignoring malformed settings {}: {e}", path.display());
                    Document::default()
                }
            },
            Err(_) => Document::default(),
        };
        Self { path, doc }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configured default zoom level index; out-of-range persisted values
    /// fall back to the 100% entry.
    pub fn default_zoom_level(&self) -> usize {
        match self.doc.preferences.zoom_level {
            Some(level) if level < ZOOM_LEVELS.len() => level,
            Some(level) => {
                log::warn!("persisted zoom level {level} out of range, using default");
                DEFAULT_ZOOM_INDEX
            }
            None => DEFAULT_ZOOM_INDEX,
        }
    }

    /// Persist a new default zoom level index
    pub fn set_default_zoom_level(&mut self, level: usize) -> Result<(), SettingsError> {
        debug_assert!(level < ZOOM_LEVELS.len());
        self.doc.preferences.zoom_level = Some(level);
        self.save()
    }

    fn save(&self) -> Result<(), SettingsError> {
        let text = toml::to_string_pretty(&self.doc)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, text)?;
        Ok(())
    }
}
