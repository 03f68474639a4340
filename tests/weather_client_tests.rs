//! Integration tests for the weather client using wiremock
//!
//! Every upstream failure mode must collapse into the same "no data"
//! outcome: the client returns `None` and never errors or panics.

use std::time::Duration;

use smartmirror::config::WeatherConfig;
use smartmirror::weather::{WeatherSample, WttrClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Minimal wttr.in `format=j1` body with the fields the client reads
fn sample_wttr_response() -> serde_json::Value {
    serde_json::json!({
        "current_condition": [{
            "temp_C": "25",
            "humidity": "71",
            "weatherDesc": [{"value": "Sunny"}],
            "windspeedKmph": "11",
            "FeelsLikeC": "26"
        }]
    })
}

fn test_client(server: &MockServer, timeout_seconds: u32) -> WttrClient {
    let config = WeatherConfig {
        base_url: server.uri(),
        timeout_seconds,
    };
    WttrClient::new(&config).expect("Failed to create client")
}

async fn mount_city_mock(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{city}")))
        .and(query_param("format", "j1"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_successful_lookup() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "Hyderabad",
        ResponseTemplate::new(200).set_body_json(sample_wttr_response()),
    )
    .await;

    let client = test_client(&server, 5);
    let sample = client.current("Hyderabad").await;

    assert_eq!(
        sample,
        Some(WeatherSample {
            temperature: 25.0,
            humidity: 71.0,
            condition: "Sunny".to_string(),
        })
    );
}

#[tokio::test]
async fn test_city_name_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/New%20York"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_wttr_response()))
        .mount(&server)
        .await;

    let client = test_client(&server, 5);
    assert!(client.current("New York").await.is_some());
}

#[tokio::test]
async fn test_non_200_yields_no_data() {
    let server = MockServer::start().await;
    mount_city_mock(&server, "Nowhere", ResponseTemplate::new(404)).await;

    let client = test_client(&server, 5);
    assert_eq!(client.current("Nowhere").await, None);
}

#[tokio::test]
async fn test_server_error_yields_no_data() {
    let server = MockServer::start().await;
    mount_city_mock(&server, "Hyderabad", ResponseTemplate::new(503)).await;

    let client = test_client(&server, 5);
    assert_eq!(client.current("Hyderabad").await, None);
}

#[tokio::test]
async fn test_malformed_body_yields_no_data() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "Hyderabad",
        ResponseTemplate::new(200).set_body_string("not json at all"),
    )
    .await;

    let client = test_client(&server, 5);
    assert_eq!(client.current("Hyderabad").await, None);
}

#[tokio::test]
async fn test_missing_fields_yield_no_data() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "Hyderabad",
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"current_condition": [{"humidity": "71"}]})),
    )
    .await;

    let client = test_client(&server, 5);
    assert_eq!(client.current("Hyderabad").await, None);
}

#[tokio::test]
async fn test_timeout_yields_no_data() {
    let server = MockServer::start().await;
    mount_city_mock(
        &server,
        "Hyderabad",
        ResponseTemplate::new(200)
            .set_body_json(sample_wttr_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = test_client(&server, 1);
    assert_eq!(client.current("Hyderabad").await, None);
}

#[tokio::test]
async fn test_unreachable_server_yields_no_data() {
    let config = WeatherConfig {
        // Nothing listens here.
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: 1,
    };
    let client = WttrClient::new(&config).expect("Failed to create client");
    assert_eq!(client.current("Hyderabad").await, None);
}
