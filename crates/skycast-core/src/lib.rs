pub mod app;
pub mod config;
pub mod error;
pub mod preferences;

pub use app::App;
pub use config::{
    Config, ConfigValidationError, LocationConfig, MapConfig, ProviderConfig, UiConfig,
    ValidationResult,
};
pub use error::{AppError, ConfigError, PreferenceError, WeatherError};
pub use preferences::PreferenceStore;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Initialize logging.
///
/// The terminal belongs to the UI, so log lines are appended to `log_path`
/// instead of stdout. Level defaults to `info` and follows `RUST_LOG`.
pub fn init(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("SkyCast core initialized");
    Ok(())
}
