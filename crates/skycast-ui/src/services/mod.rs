mod weather_service;

pub use weather_service::{fetch_weather, locate, WeatherServiceError};
