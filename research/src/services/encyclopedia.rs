//! Wikipedia-style encyclopedia client: REST summary plus rendered page HTML

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::EncyclopediaConfig;
use crate::error::{ResearchError, ResearchResult, UpstreamFailure};
use crate::traits::EncyclopediaClient;

/// Encyclopedia client over HTTP
pub struct WikipediaClient {
    client: Client,
    summary_base: Url,
    page_base: Url,
}

impl WikipediaClient {
    /// Build the client; fails on unparseable base URLs
    pub fn new(config: &EncyclopediaConfig) -> ResearchResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            summary_base: parse_base(&config.summary_base_url)?,
            page_base: parse_base(&config.page_base_url)?,
        })
    }

    async fn get(&self, base: &Url, slug: &str) -> Result<Response, UpstreamFailure> {
        let url = page_url(base, slug)?;
        debug!(url = %url, "encyclopedia request");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamFailure::from_status(response.status()));
        }
        Ok(response)
    }
}

#[async_trait]
impl EncyclopediaClient for WikipediaClient {
    async fn fetch_summary(&self, slug: &str) -> Result<Value, UpstreamFailure> {
        let response = self.get(&self.summary_base, slug).await?;
        Ok(response.json::<Value>().await?)
    }

    async fn fetch_page_html(&self, slug: &str) -> Result<String, UpstreamFailure> {
        let response = self.get(&self.page_base, slug).await?;
        Ok(response.text().await?)
    }
}

fn parse_base(raw: &str) -> ResearchResult<Url> {
    let url = Url::parse(raw).map_err(|source| ResearchError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ResearchError::config(format!("{raw} cannot be used as a base URL")));
    }
    Ok(url)
}

/// `base` with `slug` appended as one percent-encoded path segment
pub fn page_url(base: &Url, slug: &str) -> Result<Url, UpstreamFailure> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| UpstreamFailure::InvalidRequest(format!("{base} cannot be a base")))?
        .pop_if_empty()
        .push(slug);
    Ok(url)
}
