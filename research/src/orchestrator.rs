//! End-to-end research run: description, lists, industry, use cases

use async_trait::async_trait;
use chrono::Utc;

use shared::{CompanyProfile, FieldKind, ProviderConfig, RunId, RunReport, Stage, stage_info};
use crate::config::ResearchConfig;
use crate::core::classifier::classify;
use crate::core::extractor::HtmlExtraction;
use crate::core::fields::FieldGenerator;
use crate::core::resolver::DescriptionResolver;
use crate::core::use_cases::UseCaseGenerator;
use crate::error::ResearchResult;
use crate::services::{ChatCompletionsClient, WikipediaClient};
use crate::traits::{CompanyResearcher, EncyclopediaClient, LanguageModel};

/// Orchestrator wired to the real HTTP clients
pub type HttpOrchestrator = Orchestrator<WikipediaClient, ChatCompletionsClient>;

/// Sequences the pipeline stages over one encyclopedia and one model.
///
/// Holds no per-run state, so one instance can serve concurrent runs.
pub struct Orchestrator<E, L> {
    encyclopedia: E,
    model: L,
    resolver: DescriptionResolver,
    fields: FieldGenerator,
    use_cases: UseCaseGenerator,
}

impl<E, L> Orchestrator<E, L>
where
    E: EncyclopediaClient,
    L: LanguageModel,
{
    pub fn new(encyclopedia: E, model: L, html: HtmlExtraction) -> Self {
        Self {
            encyclopedia,
            model,
            resolver: DescriptionResolver::new(html),
            fields: FieldGenerator::new(),
            use_cases: UseCaseGenerator::new(),
        }
    }

    /// Research one company; always completes
    pub async fn run(&self, company_name: &str) -> RunReport {
        let run_id = RunId::new();
        let company = company_name.trim().to_string();
        let mut diagnostics = Vec::new();

        stage_info!(Stage::Description, run_id = %run_id, company = %company, "research run started");

        let description = self.resolver.resolve(&self.encyclopedia, &self.model, &company).await;
        diagnostics.extend(description.diagnostics);
        let description = description.value;
        stage_info!(Stage::Description, run_id = %run_id, source = %description.source, "description resolved");

        let offerings = self.fields.generate(&self.model, &description.text, FieldKind::Offerings).await;
        diagnostics.extend(offerings.diagnostics);

        let focus_areas = self.fields.generate(&self.model, &description.text, FieldKind::FocusAreas).await;
        diagnostics.extend(focus_areas.diagnostics);

        let industry = classify(&description.text);
        stage_info!(Stage::Industry, run_id = %run_id, industry = %industry, "industry classified");

        let profile = CompanyProfile::new(
            company.clone(),
            description.text,
            offerings.value,
            focus_areas.value,
            industry,
        );

        let use_cases = self.use_cases.generate(&self.model, &profile).await;
        diagnostics.extend(use_cases.diagnostics);
        stage_info!(
            Stage::UseCases,
            run_id = %run_id,
            items = use_cases.value.items.len(),
            diagnostics = diagnostics.len(),
            "research run finished"
        );

        RunReport {
            run_id,
            company,
            profile,
            use_cases: use_cases.value,
            diagnostics,
            generated_at: Utc::now(),
        }
    }
}

impl HttpOrchestrator {
    /// Build the HTTP clients from configuration
    pub fn from_config(config: &ResearchConfig) -> ResearchResult<Self> {
        let encyclopedia = WikipediaClient::new(&config.encyclopedia)?;
        let model = ChatCompletionsClient::new(&config.model)?;
        Ok(Self::new(encyclopedia, model, config.html.clone()))
    }
}

#[async_trait]
impl<E, L> CompanyResearcher for Orchestrator<E, L>
where
    E: EncyclopediaClient,
    L: LanguageModel,
{
    async fn run(&self, company_name: &str) -> RunReport {
        Orchestrator::run(self, company_name).await
    }

    fn provider_config(&self) -> ProviderConfig {
        self.model.provider_config()
    }
}
