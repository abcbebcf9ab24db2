//! Trait seams for upstream services and the pipeline entry point

use async_trait::async_trait;
use serde_json::Value;

use shared::{ProviderConfig, RunReport};
use crate::error::UpstreamFailure;
use crate::types::CompletionRequest;

/// Encyclopedia lookups keyed by a page slug
#[mockall::automock]
#[async_trait]
pub trait EncyclopediaClient: Send + Sync {
    /// Fetch the summary document for a page
    async fn fetch_summary(&self, slug: &str) -> Result<Value, UpstreamFailure>;

    /// Fetch the rendered HTML of a page
    async fn fetch_page_html(&self, slug: &str) -> Result<String, UpstreamFailure>;
}

/// Chat-style language model
#[mockall::automock]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send one system + user prompt and return the assistant text
    async fn complete(&self, request: CompletionRequest) -> Result<String, UpstreamFailure>;

    /// Provider and model answering the requests
    fn provider_config(&self) -> ProviderConfig;
}

/// Builds a company profile and use cases from a company name
#[mockall::automock]
#[async_trait]
pub trait CompanyResearcher: Send + Sync {
    async fn run(&self, company_name: &str) -> RunReport;

    fn provider_config(&self) -> ProviderConfig;
}
