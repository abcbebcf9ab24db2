//! OpenAI-compatible chat-completions client (OpenAI, Groq)

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use shared::ProviderConfig;
use crate::config::ModelConfig;
use crate::core::extractor::extract_json;
use crate::error::{ResearchResult, UpstreamFailure};
use crate::traits::LanguageModel;
use crate::types::{ChatCompletionBody, CompletionRequest};

/// Language model backed by a `/chat/completions` endpoint
pub struct ChatCompletionsClient {
    client: Client,
    endpoint: String,
    api_key: String,
    provider: ProviderConfig,
    temperature: f32,
}

impl ChatCompletionsClient {
    pub fn new(config: &ModelConfig) -> ResearchResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            provider: config.provider.clone(),
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LanguageModel for ChatCompletionsClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, UpstreamFailure> {
        let body = ChatCompletionBody {
            model: self.provider.model.clone(),
            messages: request.messages(),
            temperature: Some(self.temperature),
            max_tokens: Some(request.max_tokens),
        };

        debug!(provider = %self.provider.provider, model = %self.provider.model, "chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UpstreamFailure::from_status(response.status()));
        }

        let response_json: Value = response.json().await?;
        let content = extract_json(&response_json)
            .field()
            .ok_or_else(|| UpstreamFailure::MalformedResponse("no content in response".to_string()))?;

        let content = content.trim();
        if content.is_empty() {
            return Err(UpstreamFailure::MalformedResponse("empty completion".to_string()));
        }
        Ok(content.to_string())
    }

    fn provider_config(&self) -> ProviderConfig {
        self.provider.clone()
    }
}
