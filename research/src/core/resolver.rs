//! Company description lookup with an ordered chain of sources

use serde::{Deserialize, Serialize};
use std::fmt;

use shared::Stage;
use crate::core::extractor::{HtmlExtraction, extract_html, extract_json};
use crate::core::fallback::{Attempts, Outcome, StepFailure, StepResult};
use crate::core::prompt::description_request;
use crate::traits::{EncyclopediaClient, LanguageModel};

/// Name used in the synthetic sentence when the company name is blank
const UNKNOWN_COMPANY: &str = "Unknown company";

/// Where a description can come from, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionSource {
    Summary,
    Page,
    Model,
    Synthetic,
}

impl DescriptionSource {
    /// Remote sources in priority order; `Synthetic` closes the chain
    pub const PRIORITY: [DescriptionSource; 3] = [
        DescriptionSource::Summary,
        DescriptionSource::Page,
        DescriptionSource::Model,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionSource::Summary => "encyclopedia_summary",
            DescriptionSource::Page => "encyclopedia_page",
            DescriptionSource::Model => "language_model",
            DescriptionSource::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for DescriptionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted description and the source that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDescription {
    pub text: String,
    pub source: DescriptionSource,
}

/// Walks the description sources until one yields usable text
#[derive(Debug, Clone, Default)]
pub struct DescriptionResolver {
    filters: HtmlExtraction,
}

impl DescriptionResolver {
    pub fn new(filters: HtmlExtraction) -> Self {
        Self { filters }
    }

    /// Resolve a non-empty description; never fails
    pub async fn resolve<E, L>(&self, encyclopedia: &E, model: &L, company_name: &str) -> Outcome<ResolvedDescription>
    where
        E: EncyclopediaClient + ?Sized,
        L: LanguageModel + ?Sized,
    {
        let company_name = company_name.trim();
        let slug = page_slug(company_name);
        let mut attempts = Attempts::new(Stage::Description);

        for source in DescriptionSource::PRIORITY {
            let result = match source {
                DescriptionSource::Summary => self.from_summary(encyclopedia, &slug).await,
                DescriptionSource::Page => self.from_page(encyclopedia, &slug).await,
                DescriptionSource::Model => from_model(model, company_name).await,
                DescriptionSource::Synthetic => continue,
            };

            if let Some(text) = attempts.settle(source.as_str(), result) {
                return attempts.finish(ResolvedDescription { text, source });
            }
        }

        attempts.finish(ResolvedDescription {
            text: synthetic_description(company_name),
            source: DescriptionSource::Synthetic,
        })
    }

    async fn from_summary<E>(&self, encyclopedia: &E, slug: &str) -> StepResult<String>
    where
        E: EncyclopediaClient + ?Sized,
    {
        if slug.is_empty() {
            return Err(StepFailure::Skipped("blank company name".to_string()));
        }

        let summary = encyclopedia.fetch_summary(slug).await?;
        let text = summary
            .get("extract")
            .and_then(|value| value.as_str())
            .map(str::trim)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(StepFailure::rejected("summary has no extract"));
        }
        if !self.filters.accepts(text) {
            return Err(StepFailure::rejected("summary is a disambiguation page or too short"));
        }
        Ok(text.to_string())
    }

    async fn from_page<E>(&self, encyclopedia: &E, slug: &str) -> StepResult<String>
    where
        E: EncyclopediaClient + ?Sized,
    {
        if slug.is_empty() {
            return Err(StepFailure::Skipped("blank company name".to_string()));
        }

        let html = encyclopedia.fetch_page_html(slug).await?;
        extract_html(&html, &self.filters)
            .ok_or_else(|| StepFailure::rejected("page has no qualifying paragraph"))
    }
}

async fn from_model<L>(model: &L, company_name: &str) -> StepResult<String>
where
    L: LanguageModel + ?Sized,
{
    let name = if company_name.is_empty() { UNKNOWN_COMPANY } else { company_name };
    let answer = model.complete(description_request(name)).await?;

    // the client already unwraps chat bodies; this catches answers that are
    // themselves a JSON document
    let text = match serde_json::from_str::<serde_json::Value>(answer.trim()) {
        Ok(document) if document.is_object() => extract_json(&document).into_text(),
        _ => answer,
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(StepFailure::rejected("model returned an empty description"));
    }
    Ok(text.to_string())
}

/// Encyclopedia page slug: trimmed, whitespace runs joined with `_`
pub fn page_slug(company_name: &str) -> String {
    company_name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Last-resort description mentioning the company name
pub fn synthetic_description(company_name: &str) -> String {
    let name = company_name.trim();
    let name = if name.is_empty() { UNKNOWN_COMPANY } else { name };
    format!("{name} (description unavailable from public sources).")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slug() {
        assert_eq!(page_slug("  General   Motors "), "General_Motors");
        assert_eq!(page_slug("Acme"), "Acme");
        assert_eq!(page_slug("   "), "");
    }

    #[test]
    fn test_synthetic_description_mentions_name() {
        assert!(synthetic_description("Acme").starts_with("Acme "));
        assert!(synthetic_description(" ").starts_with(UNKNOWN_COMPANY));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            DescriptionSource::PRIORITY,
            [DescriptionSource::Summary, DescriptionSource::Page, DescriptionSource::Model]
        );
    }
}
