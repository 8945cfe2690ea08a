use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use skycast_core::{AppError, ConfigError};
use skycast_ui::RunOptions;

/// Terminal weather dashboard
#[derive(Parser, Debug)]
#[command(name = "skycast", version)]
#[command(about = "Current conditions, forecast, chart and map in your terminal")]
struct Args {
    /// Search this city on startup instead of using your location
    #[arg(long, short)]
    city: Option<String>,

    /// Use an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Go straight to the dashboard
    #[arg(long)]
    skip_login: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut app = skycast_core::App::new(args.config.as_deref()).map_err(explain_config_error)?;
    skycast_core::init(&app.config().log_path())?;

    tracing::info!("SkyCast started");
    for warning in app.config_warnings() {
        tracing::warn!("Config warning: {}", warning);
    }

    skycast_ui::run(
        &app,
        RunOptions {
            start_city: args.city,
            skip_login: args.skip_login,
        },
    )
    .await?;

    app.shutdown()?;
    Ok(())
}

/// Prefix config failures with the short user message
fn explain_config_error(e: anyhow::Error) -> anyhow::Error {
    match e.downcast::<ConfigError>() {
        Ok(config_error) => {
            let app_error = AppError::from(config_error);
            anyhow::anyhow!("{} {}", app_error.user_message(), app_error)
        }
        Err(other) => other,
    }
}
