//! Scripted language models

#![allow(dead_code)] // Not every test binary uses every fixture

use research::{CompletionRequest, MockLanguageModel, UpstreamFailure};
use shared::{ProviderConfig, ProviderId};

/// Canned answers keyed by the kind of request; `None` makes that call fail
#[derive(Debug, Clone, Default)]
pub struct ModelScript {
    pub description: Option<String>,
    pub offerings: Option<String>,
    pub focus_areas: Option<String>,
    pub use_cases: Option<String>,
}

impl ModelScript {
    fn answer(&self, request: &CompletionRequest) -> Result<String, UpstreamFailure> {
        let answer = if request.system.contains("copywriter") {
            &self.description
        } else if request.system.contains("product analyst") {
            &self.offerings
        } else if request.system.contains("strategic") {
            &self.focus_areas
        } else {
            &self.use_cases
        };
        answer.clone().ok_or(UpstreamFailure::RateLimitExceeded)
    }
}

/// Model answering from `script`, expecting exactly `calls` requests
pub fn scripted_model(script: ModelScript, calls: usize) -> MockLanguageModel {
    let mut model = MockLanguageModel::new();
    model
        .expect_complete()
        .times(calls)
        .returning(move |request| script.answer(&request));
    model
        .expect_provider_config()
        .returning(|| ProviderConfig::with_default_model(ProviderId::OpenAI));
    model
}

/// Model whose every call fails
pub fn failing_model(calls: usize) -> MockLanguageModel {
    scripted_model(ModelScript::default(), calls)
}
