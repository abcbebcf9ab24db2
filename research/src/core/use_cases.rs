//! AI/ML/GenAI use-case recommendations for a company profile

use shared::{CompanyProfile, ReportSource, Stage, UseCaseReport};
use crate::core::fallback::{Attempts, Outcome, StepFailure};
use crate::core::listing::parse_report_lines;
use crate::core::prompt::use_case_request;
use crate::traits::LanguageModel;

/// Canned bullets keyed by fragments of the industry label; the first
/// entry whose key occurs in the label is used
pub const USE_CASE_TEMPLATES: &[(&[&str], [&str; 3])] = &[
    (
        &["automotiv", "vehicle"],
        [
            "Predictive maintenance using telemetry + ML to reduce downtime.",
            "Visual inspection of parts using computer vision.",
            "Drive-assist personalization (GenAI for driver prompts & UX).",
        ],
    ),
    (
        &["finance", "bank"],
        [
            "Fraud detection using anomaly detection models.",
            "Smart financial summaries & compliance automation with GenAI.",
            "Customer support & chatbot for common inquiries.",
        ],
    ),
    (
        &["e-commerce", "retail"],
        [
            "Personalized product recommendations (recs + ranking).",
            "Automated product description generation using GenAI.",
            "Demand forecasting for inventory optimization.",
        ],
    ),
    (
        &["health", "medical"],
        [
            "Medical imaging assistance using CV models (triage).",
            "Clinical note summarization and coding with GenAI.",
            "Patient triage chatbot and remote-monitoring analytics.",
        ],
    ),
    (
        &["technology", "software"],
        [
            "Automated code/documentation generation with GenAI assistants.",
            "Observability analytics (anomaly detection, root-cause).",
            "Customer success automation and knowledge-base search.",
        ],
    ),
];

pub const GENERIC_USE_CASES: [&str; 3] = [
    "Improve customer experience using personalized GenAI chat assistants.",
    "Automate reporting and internal knowledge search with semantic search + GenAI.",
    "Operational efficiency via predictive analytics and automation.",
];

/// Produces the use-case report, from the model when possible
#[derive(Debug, Default, Clone)]
pub struct UseCaseGenerator;

impl UseCaseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Never fails; falls back to the industry template
    pub async fn generate<L>(&self, model: &L, profile: &CompanyProfile) -> Outcome<UseCaseReport>
    where
        L: LanguageModel + ?Sized,
    {
        let mut attempts = Attempts::new(Stage::UseCases);

        let from_model = match model.complete(use_case_request(profile)).await {
            Ok(answer) => {
                let lines = parse_report_lines(&answer);
                if lines.is_empty() {
                    Err(StepFailure::rejected("model returned no use cases"))
                } else {
                    Ok(UseCaseReport::new(lines, ReportSource::Model))
                }
            }
            Err(failure) => Err(failure.into()),
        };

        let report = match attempts.settle("model", from_model) {
            Some(report) => report,
            None => template_report(profile),
        };

        attempts.finish(report)
    }
}

/// Deterministic report built from the industry template plus one bullet
/// each for the first offering and first focus area
pub fn template_report(profile: &CompanyProfile) -> UseCaseReport {
    let label = profile.industry.label().to_lowercase();

    let bullets = USE_CASE_TEMPLATES
        .iter()
        .find(|(keys, _)| keys.iter().any(|key| label.contains(key)))
        .map(|(_, bullets)| bullets)
        .unwrap_or(&GENERIC_USE_CASES);

    let mut items: Vec<String> = bullets.iter().map(|bullet| bullet.to_string()).collect();

    if let Some(offering) = profile.offerings.first() {
        items.push(format!("Tailored solution idea: adapt GenAI to {offering}."));
    }
    if let Some(focus) = profile.focus_areas.first() {
        items.push(format!("Strategic alignment: focus on {focus} to unlock growth."));
    }

    UseCaseReport::new(items, ReportSource::Template)
}
