//! End-to-end run through the real HTTP clients against a local server

mod fixtures;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research::{HttpOrchestrator, ModelConfig, ResearchConfig};
use shared::{Industry, ProviderConfig, ProviderId, ReportSource};
use fixtures::*;

fn config_for(server: &MockServer) -> ResearchConfig {
    let mut model = ModelConfig::new(ProviderConfig::with_default_model(ProviderId::Groq), "test-key");
    model.base_url = format!("{}/openai/v1", server.uri());
    model.timeout = Duration::from_secs(2);

    let mut config = ResearchConfig::new(model);
    config.encyclopedia.summary_base_url = format!("{}/api/rest_v1/page/summary", server.uri());
    config.encyclopedia.page_base_url = format!("{}/wiki", server.uri());
    config.encyclopedia.timeout = Duration::from_secs(2);
    config
}

fn chat_answer(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    }))
}

#[tokio::test]
async fn test_summary_and_model_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Tesla"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_with_extract(TESLA_EXTRACT)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/wiki/.*"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(chat_answer("- Electric vehicles\n- Energy storage"))
        .expect(3)
        .mount(&server)
        .await;

    let orchestrator = HttpOrchestrator::from_config(&config_for(&server)).unwrap();
    let report = orchestrator.run("Tesla").await;

    assert_eq!(report.profile.description, TESLA_EXTRACT);
    assert_eq!(report.profile.industry, Industry::Automotive);
    assert_eq!(report.profile.offerings, vec!["Electric vehicles", "Energy storage"]);
    assert_eq!(report.use_cases.source, ReportSource::Model);
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn test_page_fallback_and_model_outage_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Tesla"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wiki/Tesla"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TESLA_PAGE))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let orchestrator = HttpOrchestrator::from_config(&config_for(&server)).unwrap();
    let report = orchestrator.run("Tesla").await;

    assert!(report.profile.description.starts_with("Tesla, Inc. is an American multinational"));
    assert_eq!(report.use_cases.source, ReportSource::Template);

    let errors: Vec<&str> = report.diagnostics.iter().map(|d| d.error.as_str()).collect();
    assert_eq!(
        errors,
        vec!["not found", "rate limit exceeded", "rate limit exceeded", "rate limit exceeded"]
    );
}
