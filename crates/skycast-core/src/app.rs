use anyhow::Result;
use std::path::Path;

use crate::config::ConfigValidationError;
use crate::{Config, PreferenceStore};

/// Application configuration and lifecycle
pub struct App {
    config: Config,
    preferences: PreferenceStore,
    warnings: Vec<ConfigValidationError>,
}

impl App {
    /// Load and validate configuration, optionally from an explicit path.
    /// Nothing is logged here; call [`App::config_warnings`] after `init`.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let (config, validation) = Config::load_validated(config_path)?;
        let mut app = Self::from_config(config);
        app.warnings = validation.warnings;
        Ok(app)
    }

    pub fn from_config(config: Config) -> Self {
        let preferences = PreferenceStore::new(&config.config_dir);
        Self {
            config,
            preferences,
            warnings: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Warnings found when the config was validated
    pub fn config_warnings(&self) -> &[ConfigValidationError] {
        &self.warnings
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }
}
