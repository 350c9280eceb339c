//! Persisted client preferences.
//!
//! The original system read the dark-mode flag from browser storage ad hoc
//! wherever it was needed. Here the preference is loaded from its storage
//! file once, held in an explicit [`PreferencesStore`], and threaded
//! through application state; updates persist synchronously.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme (the default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// The persisted client preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// The selected display theme.
    #[serde(default)]
    pub theme: Theme,
}

/// File-backed store for client preferences.
///
/// The file is read once at construction; afterwards the in-memory value
/// is authoritative and every update is written back through.
#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    current: RwLock<Preferences>,
}

impl PreferencesStore {
    /// Opens the store, reading the persisted preferences once.
    ///
    /// A missing file yields the defaults; it is created on first update.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StorageError`] when the file exists but
    /// cannot be read or parsed.
    pub fn open<P: Into<PathBuf>>(path: P) -> EngineResult<Self> {
        let path = path.into();

        let current = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| EngineError::StorageError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
            Err(e) => {
                return Err(EngineError::StorageError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    /// Returns the current preferences.
    pub fn get(&self) -> Preferences {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Updates the preferences and persists them.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StorageError`] when the file cannot be
    /// written; the in-memory value is left unchanged in that case.
    pub fn set(&self, preferences: Preferences) -> EngineResult<()> {
        let content =
            serde_json::to_string_pretty(&preferences).map_err(|e| EngineError::StorageError {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| EngineError::StorageError {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        *self.current.write().unwrap_or_else(|e| e.into_inner()) = preferences;
        Ok(())
    }
}
