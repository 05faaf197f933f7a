//! Persistent key-value preferences

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{DotForgeError, Result};
use crate::types::Theme;

/// Key the theme is stored under
pub const THEME_KEY: &str = "theme";

/// JSON file backed string map
pub struct PreferenceStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl PreferenceStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                DotForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
            })?;
            match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Discarding unreadable preferences");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    /// Set a value and persist immediately
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value.to_string());
        self.save(&values)?;
        tracing::info!(key, value, "Saved preference");
        Ok(())
    }

    /// Saved theme, if any
    pub fn theme(&self) -> Option<Theme> {
        self.get(THEME_KEY).and_then(|v| Theme::parse(&v))
    }

    /// Flip the saved theme and return the new one
    pub fn toggle_theme(&self) -> Result<Theme> {
        let next = self.theme().unwrap_or_default().toggled();
        self.set(THEME_KEY, &next.to_string())?;
        Ok(next)
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DotForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(values).map_err(|e| {
            DotForgeError::internal(format!("Failed to serialize preferences: {}", e))
        })?;

        std::fs::write(&self.path, content).map_err(|e| {
            DotForgeError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        })
    }
}
