//! Runtime configuration for the upstream clients
//!
//! Environment variables:
//! - RESEARCH_PROVIDER: openai|groq (default: groq when GROQ_API_KEY is set, else openai)
//! - RESEARCH_MODEL: model name (default depends on provider)
//! - RESEARCH_MODEL_BASE_URL: chat-completions base URL override
//! - OPENAI_API_KEY / GROQ_API_KEY: credential for the chosen provider (required)
//! - RESEARCH_TEMPERATURE: sampling temperature (default 0.7)
//! - RESEARCH_MODEL_TIMEOUT_SECS: model request timeout (default 10)
//! - RESEARCH_WIKI_SUMMARY_URL / RESEARCH_WIKI_PAGE_URL: encyclopedia endpoints
//! - RESEARCH_HTTP_TIMEOUT_SECS: encyclopedia request timeout (default 10)

use std::str::FromStr;
use std::time::Duration;

use shared::{ProviderConfig, ProviderId};
use crate::core::extractor::HtmlExtraction;
use crate::error::{ResearchError, ResearchResult};

pub const DEFAULT_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
pub const DEFAULT_PAGE_URL: &str = "https://en.wikipedia.org/wiki";
pub const DEFAULT_USER_AGENT: &str = concat!("company-research/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 10;

/// Encyclopedia endpoints and request settings
#[derive(Debug, Clone, PartialEq)]
pub struct EncyclopediaConfig {
    pub summary_base_url: String,
    pub page_base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for EncyclopediaConfig {
    fn default() -> Self {
        Self {
            summary_base_url: DEFAULT_SUMMARY_URL.to_string(),
            page_base_url: DEFAULT_PAGE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Chat-completions provider settings
#[derive(Clone, PartialEq)]
pub struct ModelConfig {
    pub provider: ProviderConfig,
    pub base_url: String,
    pub api_key: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl ModelConfig {
    pub fn new(provider: ProviderConfig, api_key: impl Into<String>) -> Self {
        Self {
            base_url: provider.provider.default_base_url().to_string(),
            provider,
            api_key: api_key.into(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS),
        }
    }
}

// keeps the key out of logs
impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Everything the pipeline needs to talk to its upstream services
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchConfig {
    pub encyclopedia: EncyclopediaConfig,
    pub model: ModelConfig,
    pub html: HtmlExtraction,
}

impl ResearchConfig {
    pub fn new(model: ModelConfig) -> Self {
        Self {
            encyclopedia: EncyclopediaConfig::default(),
            model,
            html: HtmlExtraction::default(),
        }
    }

    /// Load from the process environment; explicit arguments win over it
    pub fn from_env(provider: Option<ProviderId>, model: Option<String>) -> ResearchResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), provider, model)
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F, provider: Option<ProviderId>, model: Option<String>) -> ResearchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

        let provider = match provider {
            Some(provider) => provider,
            None => match get("RESEARCH_PROVIDER") {
                Some(name) => ProviderId::from_str(&name)?,
                None if get(ProviderId::Groq.api_key_var()).is_some() => ProviderId::Groq,
                None => ProviderId::OpenAI,
            },
        };

        let api_key = get(provider.api_key_var()).ok_or_else(|| ResearchError::MissingApiKey {
            var: provider.api_key_var().to_string(),
        })?;

        let provider_config = match model.or_else(|| get("RESEARCH_MODEL")) {
            Some(model) => ProviderConfig::new(provider, model),
            None => ProviderConfig::with_default_model(provider),
        };

        let mut model_config = ModelConfig::new(provider_config, api_key);
        if let Some(base_url) = get("RESEARCH_MODEL_BASE_URL") {
            model_config.base_url = base_url;
        }
        if let Some(temperature) = get("RESEARCH_TEMPERATURE") {
            model_config.temperature = parse_value("RESEARCH_TEMPERATURE", &temperature)?;
        }
        if let Some(secs) = get("RESEARCH_MODEL_TIMEOUT_SECS") {
            model_config.timeout = Duration::from_secs(parse_value("RESEARCH_MODEL_TIMEOUT_SECS", &secs)?);
        }

        let mut encyclopedia = EncyclopediaConfig::default();
        if let Some(url) = get("RESEARCH_WIKI_SUMMARY_URL") {
            encyclopedia.summary_base_url = url;
        }
        if let Some(url) = get("RESEARCH_WIKI_PAGE_URL") {
            encyclopedia.page_base_url = url;
        }
        if let Some(secs) = get("RESEARCH_HTTP_TIMEOUT_SECS") {
            encyclopedia.timeout = Duration::from_secs(parse_value("RESEARCH_HTTP_TIMEOUT_SECS", &secs)?);
        }

        Ok(Self {
            encyclopedia,
            model: model_config,
            html: HtmlExtraction::default(),
        })
    }
}

fn parse_value<T: FromStr>(field: &str, value: &str) -> ResearchResult<T> {
    value.parse().map_err(|_| {
        ResearchError::Shared(shared::SharedError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_groq_preferred_when_its_key_is_set() {
        let config = ResearchConfig::from_lookup(lookup(&[("GROQ_API_KEY", "gk")]), None, None).unwrap();

        assert_eq!(config.model.provider, ProviderConfig::with_default_model(ProviderId::Groq));
        assert_eq!(config.model.api_key, "gk");
        assert_eq!(config.model.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.encyclopedia, EncyclopediaConfig::default());
        assert_eq!(config.model.timeout, Duration::from_secs(10));
        assert_eq!(config.encyclopedia.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = ResearchConfig::from_lookup(lookup(&[]), None, None).unwrap_err();
        assert!(matches!(err, ResearchError::MissingApiKey { ref var } if var == "OPENAI_API_KEY"));

        let err = ResearchConfig::from_lookup(lookup(&[("GROQ_API_KEY", "gk")]), Some(ProviderId::OpenAI), None)
            .unwrap_err();
        assert!(matches!(err, ResearchError::MissingApiKey { .. }));
    }

    #[test]
    fn test_overrides_and_env_values() {
        let env = lookup(&[
            ("RESEARCH_PROVIDER", "groq"),
            ("OPENAI_API_KEY", "ok"),
            ("RESEARCH_MODEL", "env-model"),
            ("RESEARCH_TEMPERATURE", "0.2"),
            ("RESEARCH_HTTP_TIMEOUT_SECS", "3"),
            ("RESEARCH_WIKI_SUMMARY_URL", "http://localhost:9000/summary"),
        ]);

        let config = ResearchConfig::from_lookup(env, Some(ProviderId::OpenAI), Some("cli-model".into())).unwrap();

        assert_eq!(config.model.provider, ProviderConfig::new(ProviderId::OpenAI, "cli-model"));
        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.encyclopedia.timeout, Duration::from_secs(3));
        assert_eq!(config.encyclopedia.summary_base_url, "http://localhost:9000/summary");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let env = lookup(&[("OPENAI_API_KEY", "ok"), ("RESEARCH_MODEL_TIMEOUT_SECS", "soon")]);
        assert!(ResearchConfig::from_lookup(env, None, None).is_err());

        let env = lookup(&[("OPENAI_API_KEY", "ok"), ("RESEARCH_PROVIDER", "gemini")]);
        assert!(matches!(
            ResearchConfig::from_lookup(env, None, None),
            Err(ResearchError::Shared(_))
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = ModelConfig::new(ProviderConfig::with_default_model(ProviderId::OpenAI), "secret-key");
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
