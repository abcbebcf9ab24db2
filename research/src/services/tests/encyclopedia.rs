//! Tests for WikipediaClient

use std::time::Duration;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::EncyclopediaConfig;
use crate::error::UpstreamFailure;
use crate::services::encyclopedia::{WikipediaClient, page_url};
use crate::traits::EncyclopediaClient;

fn config_for(server: &MockServer) -> EncyclopediaConfig {
    EncyclopediaConfig {
        summary_base_url: format!("{}/api/rest_v1/page/summary", server.uri()),
        page_base_url: format!("{}/wiki", server.uri()),
        timeout: Duration::from_millis(300),
        ..EncyclopediaConfig::default()
    }
}

#[test]
fn test_page_url_encodes_slug_as_one_segment() {
    let base = Url::parse("https://en.wikipedia.org/wiki").unwrap();
    assert_eq!(page_url(&base, "General_Motors").unwrap().as_str(), "https://en.wikipedia.org/wiki/General_Motors");
    assert_eq!(page_url(&base, "AC/DC").unwrap().as_str(), "https://en.wikipedia.org/wiki/AC%2FDC");

    let trailing = Url::parse("https://en.wikipedia.org/wiki/").unwrap();
    assert_eq!(page_url(&trailing, "Acme").unwrap().as_str(), "https://en.wikipedia.org/wiki/Acme");
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let config = EncyclopediaConfig {
        summary_base_url: "not a url".to_string(),
        ..EncyclopediaConfig::default()
    };
    assert!(WikipediaClient::new(&config).is_err());
}

#[tokio::test]
async fn test_fetch_summary_returns_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Acme_Corp"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Acme Corp",
            "extract": "Acme Corp is a fictional manufacturer of everything."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WikipediaClient::new(&config_for(&server)).unwrap();
    let summary = client.fetch_summary("Acme_Corp").await.unwrap();

    assert_eq!(summary["extract"], "Acme Corp is a fictional manufacturer of everything.");
}

#[tokio::test]
async fn test_fetch_page_html_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Acme_Corp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><p>Hello</p></html>"))
        .mount(&server)
        .await;

    let client = WikipediaClient::new(&config_for(&server)).unwrap();
    let html = client.fetch_page_html("Acme_Corp").await.unwrap();

    assert!(html.contains("<p>Hello</p>"));
}

#[tokio::test]
async fn test_missing_page_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = WikipediaClient::new(&config_for(&server)).unwrap();

    assert_eq!(client.fetch_summary("Nobody").await.unwrap_err(), UpstreamFailure::NotFound);
    assert_eq!(client.fetch_page_html("Nobody").await.unwrap_err(), UpstreamFailure::NotFound);
}

#[tokio::test]
async fn test_non_json_summary_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = WikipediaClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_summary("Acme").await.unwrap_err();

    assert!(matches!(err, UpstreamFailure::MalformedResponse(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = WikipediaClient::new(&config_for(&server)).unwrap();

    assert_eq!(client.fetch_page_html("Acme").await.unwrap_err(), UpstreamFailure::Timeout);
}
