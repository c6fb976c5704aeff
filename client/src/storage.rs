//! Local settings stores
//!
//! Values are best effort: a store that cannot be read starts empty and a
//! failed write is logged and dropped.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::ports::SettingsStore;

/// Keys shared with the zone page
pub mod keys {
    /// Background music volume, percent
    pub const BGM_VOLUME: &str = "zoneBgmVolume";
    /// `"1"` once the browser granted autoplay
    pub const AUDIO_UNLOCKED: &str = "audioUnlocked";
}

/// Settings kept for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn save(&self, key: &str, value: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!(error = %e, "Settings lock poisoned"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.write() {
            guard.remove(key);
        }
    }
}

/// Settings persisted as a flat JSON object
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store, reading existing values if the file is there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = read_values(&path);

        tracing::debug!(path = %path.display(), entries = cache.len(), "Settings store opened");

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::error!(path = %parent.display(), error = %e, "Failed to create settings directory");
            return;
        }

        let data = match self.cache.read() {
            Ok(guard) => serde_json::to_string_pretty(&*guard),
            Err(e) => {
                tracing::error!(error = %e, "Settings lock poisoned");
                return;
            }
        };

        match data {
            Ok(data) => {
                if let Err(e) = fs::write(&self.path, data) {
                    tracing::error!(path = %self.path.display(), error = %e, "Failed to write settings");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize settings"),
        }
    }
}

fn read_values(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }

    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed settings file");
            HashMap::new()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read settings file");
            HashMap::new()
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "Settings lock poisoned");
                return;
            }
        }
        self.persist();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => {
                tracing::error!(error = %e, "Settings lock poisoned");
                return;
            }
        }
        self.persist();
    }
}
