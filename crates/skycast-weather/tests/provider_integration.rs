//! Integration tests for WeatherProvider using wiremock.

use std::time::Duration;

use skycast_weather::{
    daily_forecast, Coordinate, FetchError, ProviderSettings, Query, WeatherCondition,
    WeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn provider(server: &MockServer) -> WeatherProvider {
    WeatherProvider::new(ProviderSettings {
        base_url: server.uri(),
        api_key: API_KEY.to_string(),
        units: "metric".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn current_body(name: &str, lat: f64, lon: f64) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lat": lat, "lon": lon },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "main": { "temp": 12.3, "feels_like": 11.0, "humidity": 81, "pressure": 1008 },
        "wind": { "speed": 4.6, "deg": 230 },
        "sys": { "country": "GB", "sunrise": 1710051600, "sunset": 1710093600 },
        "dt": 1710072000,
        "name": name
    })
}

/// `count` entries, 3 hours apart, starting 2024-03-10 00:00 UTC
fn forecast_body(count: i64) -> serde_json::Value {
    let list: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "dt": 1710028800 + i * 3 * 3600,
                "main": { "temp": 5.0 + i as f64 },
                "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds" }]
            })
        })
        .collect();
    serde_json::json!({ "cod": "200", "cnt": count, "list": list })
}

fn uv_body(lat: f64, lon: f64, value: f64) -> serde_json::Value {
    serde_json::json!({ "lat": lat, "lon": lon, "date_iso": "2024-03-10T12:00:00Z", "value": value })
}

#[tokio::test]
async fn test_fetch_by_city_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("London", 51.51, -0.13)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", "London"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(13)))
        .expect(1)
        .mount(&server)
        .await;

    // UV follows the coordinate returned with the current conditions
    Mock::given(method("GET"))
        .and(path("/data/2.5/uvi"))
        .and(query_param("lat", "51.51"))
        .and(query_param("lon", "-0.13"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(uv_body(51.51, -0.13, 2.7)))
        .expect(1)
        .mount(&server)
        .await;

    let report = provider(&server)
        .fetch(&Query::City("London".into()))
        .await
        .unwrap();

    assert_eq!(report.snapshot.place_name, "London");
    assert_eq!(report.snapshot.temperature, 12.3);
    assert_eq!(report.snapshot.humidity, 81);
    assert_eq!(report.snapshot.wind_speed, 4.6);
    assert_eq!(report.snapshot.pressure, 1008.0);
    assert_eq!(report.snapshot.condition, WeatherCondition::Rain);
    assert_eq!(report.snapshot.description, "light rain");
    assert_eq!(report.snapshot.sunrise.timestamp(), 1710051600);
    assert_eq!(report.forecast.len(), 13);
    assert_eq!(report.uv_index.value, 2.7);
    assert_eq!(report.uv_index.coord, report.snapshot.coord);

    let days = daily_forecast(&report.forecast, &chrono::Utc);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].temperature, 5.0);
    assert_eq!(days[1].temperature, 13.0);
}

#[tokio::test]
async fn test_fetch_by_coordinate_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "35.68"))
        .and(query_param("lon", "139.69"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Tokyo", 35.68, 139.69)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("lat", "35.68"))
        .and(query_param("lon", "139.69"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/uvi"))
        .and(query_param("lat", "35.68"))
        .and(query_param("lon", "139.69"))
        .respond_with(ResponseTemplate::new(200).set_body_json(uv_body(35.68, 139.69, 6.1)))
        .mount(&server)
        .await;

    let coord = Coordinate::new(35.68, 139.69);
    let report = provider(&server)
        .fetch(&Query::Coordinate(coord))
        .await
        .unwrap();

    assert_eq!(report.snapshot.place_name, "Tokyo");
    assert_eq!(report.uv_index.coord, coord);
    assert_eq!(report.forecast.len(), 40);
    assert_eq!(daily_forecast(&report.forecast, &chrono::Utc).len(), 5);
}

#[tokio::test]
async fn test_forecast_failure_fails_whole_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris", 48.85, 2.35)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/uvi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(uv_body(48.85, 2.35, 1.0)))
        .mount(&server)
        .await;

    let result = provider(&server).fetch(&Query::City("Paris".into())).await;

    match result {
        Err(FetchError::Status { endpoint, status }) => {
            assert_eq!(endpoint, "forecast");
            assert_eq!(status, 500);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_uv_failure_fails_whole_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Lima", -12.05, -77.04)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(8)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/uvi"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let result = provider(&server).fetch(&Query::City("Lima".into())).await;

    assert!(matches!(
        result,
        Err(FetchError::Status { endpoint: "uvi", status: 401 })
    ));
}

#[tokio::test]
async fn test_unknown_city_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let result = provider(&server).fetch(&Query::City("Atlantis".into())).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("404"), "Error should mention 404 status: {}", err);
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(8)))
        .mount(&server)
        .await;

    let result = provider(&server).fetch(&Query::City("Oslo".into())).await;

    assert!(matches!(
        result,
        Err(FetchError::Parse { endpoint: "weather", .. })
    ));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let provider = WeatherProvider::new(ProviderSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(2),
        ..ProviderSettings::default()
    })
    .unwrap();

    let result = provider
        .fetch(&Query::Coordinate(Coordinate::new(1.0, 2.0)))
        .await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}
