//! Persisted user preferences.
//!
//! The only preference is dark mode. It lives in `preferences.toml` next to
//! the config file as `dark_mode = true|false`. Anything other than a
//! readable `true` means light mode.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PreferenceError;

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    dark_mode: bool,
}

/// File-backed preference store
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store inside `config_dir`
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the dark mode flag. Missing or unreadable files read as `false`.
    pub fn dark_mode(&self) -> bool {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("No stored preferences at {:?}: {}", self.path, e);
                return false;
            }
        };

        match toml::from_str::<StoredPreferences>(&contents) {
            Ok(prefs) => prefs.dark_mode,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preferences file: {}", e);
                false
            }
        }
    }

    /// Persist the dark mode flag
    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string(&StoredPreferences { dark_mode: enabled })?;
        fs::write(&self.path, contents)?;

        tracing::debug!("Stored dark_mode = {}", enabled);
        Ok(())
    }
}
