//! OpenWeatherMap client.
//!
//! Three endpoints, keyed by city name or coordinate. A fetch succeeds only
//! if all three succeed; there is no retry and no partial result.

use crate::types::{
    Coordinate, FetchError, ForecastEntry, Query, UvIndex, WeatherCondition, WeatherReport,
    WeatherSnapshot,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const CURRENT_ENDPOINT: &str = "weather";
const FORECAST_ENDPOINT: &str = "forecast";
const UV_ENDPOINT: &str = "uvi";

/// Connection settings for [`WeatherProvider`]
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: String,
    pub units: String,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org".to_string(),
            api_key: String::new(),
            units: "metric".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    units: String,
}

impl WeatherProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            units: settings.units,
        })
    }

    /// Fetch current conditions, forecast and UV index for `query`.
    ///
    /// For a city the UV index is requested with the coordinate the current
    /// conditions came back with, so all three describe the same place.
    pub async fn fetch(&self, query: &Query) -> Result<WeatherReport, FetchError> {
        if let Query::City(name) = query {
            if name.trim().is_empty() {
                return Err(FetchError::InvalidQuery("empty city name".to_string()));
            }
        }

        tracing::debug!("Fetching weather for {}", query);

        let (snapshot, forecast, uv_index) = match query {
            Query::City(_) => {
                let (snapshot, forecast) =
                    tokio::try_join!(self.current(query), self.forecast(query))?;
                let uv_index = self.uv_index(snapshot.coord).await?;
                (snapshot, forecast, uv_index)
            }
            Query::Coordinate(coord) => tokio::try_join!(
                self.current(query),
                self.forecast(query),
                self.uv_index(*coord)
            )?,
        };

        tracing::info!(
            "Fetched weather for {} ({} forecast entries)",
            snapshot.place_name,
            forecast.len()
        );

        Ok(WeatherReport {
            snapshot,
            forecast,
            uv_index,
            fetched_at: Utc::now(),
        })
    }

    /// Current conditions
    pub async fn current(&self, query: &Query) -> Result<WeatherSnapshot, FetchError> {
        let mut params = query_params(query);
        params.push(("units", self.units.clone()));

        let body: wire::CurrentResponse = self.get_json(CURRENT_ENDPOINT, &params).await?;
        body.into_snapshot()
    }

    /// 5-day forecast in 3-hour steps, in provider order
    pub async fn forecast(&self, query: &Query) -> Result<Vec<ForecastEntry>, FetchError> {
        let mut params = query_params(query);
        params.push(("units", self.units.clone()));

        let body: wire::ForecastResponse = self.get_json(FORECAST_ENDPOINT, &params).await?;
        body.list
            .into_iter()
            .map(wire::ForecastItem::into_entry)
            .collect()
    }

    pub async fn uv_index(&self, coord: Coordinate) -> Result<UvIndex, FetchError> {
        let params = query_params(&Query::Coordinate(coord));

        let body: wire::UvResponse = self.get_json(UV_ENDPOINT, &params).await?;
        Ok(UvIndex {
            coord,
            value: body.value,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/data/2.5/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} request failed with status {}", endpoint, status);
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse {
            endpoint,
            message: e.to_string(),
        })
    }
}

fn query_params(query: &Query) -> Vec<(&'static str, String)> {
    match query {
        Query::City(name) => vec![("q", name.trim().to_string())],
        Query::Coordinate(c) => vec![
            ("lat", c.latitude.to_string()),
            ("lon", c.longitude.to_string()),
        ],
    }
}

fn timestamp(endpoint: &'static str, secs: i64) -> Result<DateTime<Utc>, FetchError> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| FetchError::Parse {
        endpoint,
        message: format!("timestamp out of range: {}", secs),
    })
}

/// Provider JSON shapes, limited to the fields SkyCast reads
mod wire {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub id: u32,
        #[serde(default)]
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Main {
        pub temp: f64,
        #[serde(default)]
        pub humidity: f64,
        #[serde(default)]
        pub pressure: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        #[serde(default)]
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Sys {
        pub sunrise: i64,
        pub sunset: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        #[serde(default)]
        pub name: String,
        pub coord: Coord,
        pub main: Main,
        pub wind: Wind,
        pub sys: Sys,
        #[serde(default)]
        pub weather: Vec<Condition>,
        pub dt: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        pub dt: i64,
        pub main: Main,
        #[serde(default)]
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct UvResponse {
        pub value: f64,
    }

    fn condition(weather: &[Condition]) -> (WeatherCondition, String) {
        weather
            .first()
            .map(|c| (WeatherCondition::from_owm_id(c.id), c.description.clone()))
            .unwrap_or_default()
    }

    impl CurrentResponse {
        pub fn into_snapshot(self) -> Result<WeatherSnapshot, FetchError> {
            let (condition, description) = condition(&self.weather);
            let coord = Coordinate::new(self.coord.lat, self.coord.lon);
            let place_name = if self.name.is_empty() {
                coord.to_string()
            } else {
                self.name
            };

            Ok(WeatherSnapshot {
                place_name,
                coord,
                temperature: self.main.temp,
                humidity: self.main.humidity.round().clamp(0.0, 100.0) as u8,
                wind_speed: self.wind.speed,
                pressure: self.main.pressure,
                sunrise: timestamp(CURRENT_ENDPOINT, self.sys.sunrise)?,
                sunset: timestamp(CURRENT_ENDPOINT, self.sys.sunset)?,
                condition,
                description,
                observed_at: timestamp(CURRENT_ENDPOINT, self.dt)?,
            })
        }
    }

    impl ForecastItem {
        pub fn into_entry(self) -> Result<ForecastEntry, FetchError> {
            let (condition, description) = condition(&self.weather);
            Ok(ForecastEntry {
                timestamp: timestamp(FORECAST_ENDPOINT, self.dt)?,
                temperature: self.main.temp,
                condition,
                description,
            })
        }
    }
}
