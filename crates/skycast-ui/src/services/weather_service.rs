//! Weather backend: async fetching and location lookup.
//! Each call is a task body; the runtime spawns it and dispatches the result.

use std::sync::Arc;

use skycast_weather::{LocationError, LocationOptions, Query, WeatherProvider};

use crate::action::Action;

/// Error type for weather operations, as carried in result actions
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherServiceError {
    Fetch(String),
    Location(String),
    LocationUnsupported,
}

impl std::fmt::Display for WeatherServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherServiceError::Fetch(s) => write!(f, "Weather error: {}", s),
            WeatherServiceError::Location(s) => write!(f, "Location error: {}", s),
            WeatherServiceError::LocationUnsupported => write!(f, "No location service on this host"),
        }
    }
}

impl std::error::Error for WeatherServiceError {}

impl From<LocationError> for WeatherServiceError {
    fn from(e: LocationError) -> Self {
        match e {
            LocationError::ServiceUnavailable => WeatherServiceError::LocationUnsupported,
            other => WeatherServiceError::Location(other.to_string()),
        }
    }
}

/// Fetch weather for `query`.
/// Resolves to `WeatherDidLoad` or `WeatherDidError`; run it as a task.
pub async fn fetch_weather(provider: Arc<WeatherProvider>, query: Query) -> Action {
    match provider.fetch(&query).await {
        Ok(report) => Action::WeatherDidLoad(Box::new(report)),
        Err(e) => {
            tracing::error!("Failed to fetch weather for {}: {}", query, e);
            Action::WeatherDidError(WeatherServiceError::Fetch(e.to_string()))
        }
    }
}

/// Look up the current position.
/// Resolves to `LocationDidResolve` or `LocationDidFail`; run it as a task.
pub async fn locate(options: LocationOptions) -> Action {
    match skycast_weather::get_current_location(&options).await {
        Ok(location) => {
            tracing::info!("Got location: {}", location.coord);
            Action::LocationDidResolve(location.coord)
        }
        Err(e) => {
            tracing::error!("Error obtaining location: {}", e);
            Action::LocationDidFail(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::{Coordinate, ProviderSettings};
    use std::time::Duration;

    #[test]
    fn weather_error_display() {
        assert!(format!("{}", WeatherServiceError::Fetch("timeout".into())).contains("Weather"));
        assert!(format!("{}", WeatherServiceError::Location("denied".into())).contains("Location"));
    }

    #[test]
    fn location_error_mapping() {
        assert_eq!(
            WeatherServiceError::from(LocationError::ServiceUnavailable),
            WeatherServiceError::LocationUnsupported
        );
        assert!(matches!(
            WeatherServiceError::from(LocationError::Timeout),
            WeatherServiceError::Location(_)
        ));
    }

    #[tokio::test]
    async fn fixed_location_resolves() {
        let coord = Coordinate::new(-33.87, 151.21);

        let action = locate(LocationOptions {
            fixed: Some(coord),
            ..LocationOptions::default()
        })
        .await;

        assert_eq!(action, Action::LocationDidResolve(coord));
    }

    #[tokio::test]
    async fn unreachable_provider_reports_error_action() {
        let provider = WeatherProvider::new(ProviderSettings {
            base_url: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(2),
            ..ProviderSettings::default()
        })
        .unwrap();

        let action = fetch_weather(Arc::new(provider), Query::City("Quito".into())).await;

        assert!(matches!(
            action,
            Action::WeatherDidError(WeatherServiceError::Fetch(_))
        ));
    }
}
