//! Terminal setup and the UI runtime.
//!
//! [`EffectRuntime`] owns [`AppState`] and is its only writer. Terminal
//! events become actions through [`map_event`]; fetch and location results
//! come back as actions from keyed tasks; a subscription drives the spinner.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use skycast_core::{App, AppError, Config, PreferenceStore};
use skycast_weather::{
    Coordinate, LocationOptions, ProviderSettings, Query, TileUrls, WeatherProvider,
};
use tui_dispatch::{EffectContext, EffectRuntime, EffectStore, TaskManager};

use crate::action::Action;
use crate::components;
use crate::effect::Effect;
use crate::input::map_event;
use crate::reducer::reducer;
use crate::services::{fetch_weather, locate};
use crate::state::{AppState, MapSettings, Startup};

const MIN_TICK_MS: u64 = 16;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Search this city on startup instead of asking for the position
    pub start_city: Option<String>,
    /// Go straight to the dashboard
    pub skip_login: bool,
}

/// Everything the effect handler needs
struct Services {
    provider: Arc<WeatherProvider>,
    location: LocationOptions,
    preferences: PreferenceStore,
}

impl Services {
    fn handle(&self, effect: Effect, ctx: &mut EffectContext<Action>) {
        match effect {
            Effect::Locate => self.spawn_locate(ctx.tasks()),
            Effect::FetchWeather(query) => self.spawn_fetch(query, ctx.tasks()),
            Effect::PersistDarkMode(enabled) => {
                if let Some(action) = self.persist_dark_mode(enabled) {
                    ctx.emit(action);
                }
            }
        }
    }

    // Spawning under a key aborts the task still running under it, so only
    // the latest request can report back.

    fn spawn_locate(&self, tasks: &mut TaskManager<Action>) {
        tasks.spawn("locate", locate(self.location.clone()));
    }

    fn spawn_fetch(&self, query: Query, tasks: &mut TaskManager<Action>) {
        tracing::info!("Fetching weather for {}", query);
        tasks.spawn("weather", fetch_weather(self.provider.clone(), query));
    }

    /// Store the flag; on failure returns the action that reports it
    fn persist_dark_mode(&self, enabled: bool) -> Option<Action> {
        match self.preferences.set_dark_mode(enabled) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Failed to persist dark mode: {}", e);
                Some(Action::DarkModeDidFail(AppError::from(e).user_message()))
            }
        }
    }
}

/// Run the terminal UI until the user quits
pub async fn run(app: &App, options: RunOptions) -> Result<()> {
    let config = app.config();

    let provider = WeatherProvider::new(provider_settings(config))
        .context("Failed to create weather client")?;

    let startup = match options.start_city.or_else(|| config.ui.default_city.clone()) {
        Some(city) if !city.trim().is_empty() => Startup::City(city.trim().to_string()),
        _ => Startup::Locate,
    };

    let state = AppState::new(
        app.preferences().dark_mode(),
        startup,
        map_settings(config),
    );

    let services = Services {
        provider: Arc::new(provider),
        location: location_options(config),
        preferences: app.preferences().clone(),
    };

    let mut runtime = EffectRuntime::from_store(EffectStore::new(state, reducer));
    let tick = Duration::from_millis(config.ui.tick_ms.max(MIN_TICK_MS));
    runtime.subscriptions().interval("tick", tick, || Action::Tick);
    if options.skip_login {
        runtime.enqueue(Action::AuthSkip);
    }

    let mut terminal = setup_terminal()?;

    let result = runtime
        .run(
            &mut terminal,
            |frame, area, state, _ctx| components::render(frame, area, state),
            map_event,
            |action| matches!(action, Action::Quit),
            |effect, ctx| services.handle(effect, ctx),
        )
        .await
        .context("UI loop failed");
    tracing::info!("UI loop finished");

    // Restore the terminal even when the loop failed
    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
        });

    restore_on_error(terminal, restore_terminal)
}

/// On `Err`, undo the terminal setup before handing the error back
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    if result.is_err() {
        if let Err(e) = restore() {
            tracing::error!("Failed to restore terminal: {}", e);
        }
    }
    result
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

fn provider_settings(config: &Config) -> ProviderSettings {
    ProviderSettings {
        base_url: config.provider.base_url.clone(),
        api_key: config.provider.api_key.clone(),
        units: config.provider.units.clone(),
        timeout: Duration::from_secs(config.provider.timeout_secs),
    }
}

fn location_options(config: &Config) -> LocationOptions {
    LocationOptions {
        fixed: config
            .location
            .fixed_position()
            .map(|(lat, lon)| Coordinate::new(lat, lon)),
        desktop_id: config.location.desktop_id.clone(),
        timeout: Duration::from_secs(config.location.timeout_secs),
    }
}

fn map_settings(config: &Config) -> MapSettings {
    MapSettings {
        urls: TileUrls {
            base_template: config.map.base_tile_url.clone(),
            overlay_root: config.map.overlay_tile_url.clone(),
            api_key: config.provider.api_key.clone(),
        },
        zoom: config.map.zoom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::error::PREFERENCE_FAILED_MESSAGE;
    use tokio::sync::mpsc;
    use tui_dispatch::TaskKey;

    fn config() -> Config {
        let mut config = Config::default();
        config.provider.api_key = "KEY".into();
        config.location.latitude = Some(48.2);
        config.location.longitude = Some(16.37);
        config.map.zoom = 7;
        config
    }

    #[test]
    fn test_settings_follow_config() {
        let config = config();

        let provider = provider_settings(&config);
        assert_eq!(provider.api_key, "KEY");
        assert_eq!(provider.timeout, Duration::from_secs(config.provider.timeout_secs));

        let location = location_options(&config);
        assert_eq!(location.fixed, Some(Coordinate::new(48.2, 16.37)));

        let map = map_settings(&config);
        assert_eq!(map.zoom, 7);
        assert_eq!(map.urls.api_key, "KEY");
    }

    fn services(dir: &std::path::Path, location: LocationOptions) -> Services {
        Services {
            provider: Arc::new(WeatherProvider::new(ProviderSettings::default()).unwrap()),
            location,
            preferences: PreferenceStore::new(dir),
        }
    }

    #[tokio::test]
    async fn test_locate_effect_runs_as_task() {
        let dir = tempfile::tempdir().unwrap();
        let coord = Coordinate::new(35.68, 139.69);
        let services = services(
            dir.path(),
            LocationOptions {
                fixed: Some(coord),
                ..LocationOptions::default()
            },
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        services.spawn_locate(&mut tasks);

        assert!(tasks.is_running(&TaskKey::new("locate")));
        assert_eq!(rx.recv().await, Some(Action::LocationDidResolve(coord)));
    }

    #[tokio::test]
    async fn test_new_fetch_replaces_running_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let services = services(dir.path(), LocationOptions::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        services.spawn_fetch(Query::City("Lagos".into()), &mut tasks);
        services.spawn_fetch(Query::City("Accra".into()), &mut tasks);

        assert_eq!(tasks.len(), 1);
        assert!(tasks.is_running(&TaskKey::new("weather")));
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let mut restored = false;

        let result: Result<()> = restore_on_error(Err(anyhow::anyhow!("no tty")), || {
            restored = true;
            Ok(())
        });

        assert!(restored);
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let mut restored = false;

        let result = restore_on_error(Ok(7), || {
            restored = true;
            Ok(())
        });

        assert_eq!(result.unwrap(), 7);
        assert!(!restored);
    }

    #[test]
    fn test_dark_mode_effect_writes_preference() {
        let dir = tempfile::tempdir().unwrap();
        let services = services(dir.path(), LocationOptions::default());

        assert_eq!(services.persist_dark_mode(true), None);

        assert!(PreferenceStore::new(dir.path()).dark_mode());
    }

    #[test]
    fn test_dark_mode_write_failure_reports_action() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let services = services(&blocker, LocationOptions::default());

        assert_eq!(
            services.persist_dark_mode(true),
            Some(Action::DarkModeDidFail(PREFERENCE_FAILED_MESSAGE))
        );
    }
}
