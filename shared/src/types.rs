//! Core shared types and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Upper bound on offerings and focus areas kept in a profile
pub const MAX_LIST_ITEMS: usize = 3;

/// Unique identifier for one pipeline run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language-model providers speaking the chat-completions protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAI,
    Groq,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "openai",
            ProviderId::Groq => "groq",
        }
    }

    /// Environment variable holding the provider's API key
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "OPENAI_API_KEY",
            ProviderId::Groq => "GROQ_API_KEY",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "https://api.openai.com/v1",
            ProviderId::Groq => "https://api.groq.com/openai/v1",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderId::OpenAI),
            "groq" => Ok(ProviderId::Groq),
            _ => Err(SharedError::UnknownProvider { name: s.to_string() }),
        }
    }
}

/// Provider configuration with model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProviderConfig {
    pub provider: ProviderId,
    pub model: String,
}

impl ProviderConfig {
    pub fn new(provider: ProviderId, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn with_default_model(provider: ProviderId) -> Self {
        let model = match provider {
            ProviderId::OpenAI => "gpt-4o-mini",
            ProviderId::Groq => "llama-3.1-70b-versatile",
        };
        Self::new(provider, model)
    }
}

/// Closed set of industry labels a description can be classified into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "Automotive")]
    Automotive,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "E-commerce/Retail")]
    ECommerceRetail,
    #[serde(rename = "Technology")]
    Technology,
    #[serde(rename = "Entertainment/Media")]
    EntertainmentMedia,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[default]
    #[serde(rename = "General Industry")]
    GeneralIndustry,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Automotive,
        Industry::Finance,
        Industry::ECommerceRetail,
        Industry::Technology,
        Industry::EntertainmentMedia,
        Industry::Healthcare,
        Industry::GeneralIndustry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Automotive => "Automotive",
            Industry::Finance => "Finance",
            Industry::ECommerceRetail => "E-commerce/Retail",
            Industry::Technology => "Technology",
            Industry::EntertainmentMedia => "Entertainment/Media",
            Industry::Healthcare => "Healthcare",
            Industry::GeneralIndustry => "General Industry",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which short list is being derived from a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Offerings,
    FocusAreas,
}

impl FieldKind {
    pub fn stage(&self) -> Stage {
        match self {
            FieldKind::Offerings => Stage::Offerings,
            FieldKind::FocusAreas => Stage::FocusAreas,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Offerings => write!(f, "offerings"),
            FieldKind::FocusAreas => write!(f, "focus areas"),
        }
    }
}

/// Pipeline stage, used to tag diagnostics and log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Description,
    Offerings,
    FocusAreas,
    Industry,
    UseCases,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Description => write!(f, "description"),
            Stage::Offerings => write!(f, "offerings"),
            Stage::FocusAreas => write!(f, "focus_areas"),
            Stage::Industry => write!(f, "industry"),
            Stage::UseCases => write!(f, "use_cases"),
        }
    }
}

/// A fallback step that failed or whose result was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub stage: Stage,
    pub step: String,
    pub error: String,
}

impl Diagnostic {
    pub fn new(stage: Stage, step: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            stage,
            step: step.into(),
            error: error.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.step, self.error)
    }
}

/// Structured summary of a company, built once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub description: String,
    pub offerings: Vec<String>,
    pub focus_areas: Vec<String>,
    pub industry: Industry,
}

impl CompanyProfile {
    /// Build a profile, normalizing both lists to at most three
    /// trimmed, non-empty, case-insensitively distinct entries
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        offerings: Vec<String>,
        focus_areas: Vec<String>,
        industry: Industry,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            description: description.into().trim().to_string(),
            offerings: normalize_list(offerings),
            focus_areas: normalize_list(focus_areas),
            industry,
        }
    }
}

/// Trim, drop blanks, dedupe case-insensitively (first spelling wins)
/// and cap at `MAX_LIST_ITEMS`
pub fn normalize_list<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item = item.as_ref().trim();
        if item.is_empty() || !seen.insert(item.to_lowercase()) {
            continue;
        }
        out.push(item.to_string());
        if out.len() == MAX_LIST_ITEMS {
            break;
        }
    }
    out
}

/// Where the use-case lines came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Model,
    Template,
}

/// Recommended AI/ML/GenAI use cases for one profile, one line per item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseReport {
    pub items: Vec<String>,
    pub source: ReportSource,
}

impl UseCaseReport {
    pub fn new(items: Vec<String>, source: ReportSource) -> Self {
        Self { items, source }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render as a markdown bullet list
    pub fn to_markdown(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub company: String,
    pub profile: CompanyProfile,
    pub use_cases: UseCaseReport,
    pub diagnostics: Vec<Diagnostic>,
    pub generated_at: DateTime<Utc>,
}

impl RunReport {
    pub fn to_json_pretty(&self) -> SharedResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_list_dedupes_case_insensitively() {
        let items = vec![
            "  Cloud Hosting ".to_string(),
            "cloud hosting".to_string(),
            "".to_string(),
            "Consulting".to_string(),
            "Training".to_string(),
            "Support".to_string(),
        ];

        let normalized = normalize_list(items);
        assert_eq!(normalized, vec!["Cloud Hosting", "Consulting", "Training"]);
    }

    #[test]
    fn test_profile_new_enforces_list_invariants() {
        let profile = CompanyProfile::new(
            " Acme ",
            " Acme builds widgets. ",
            vec!["Widgets".into(), "WIDGETS".into(), "   ".into()],
            vec![],
            Industry::GeneralIndustry,
        );

        assert_eq!(profile.name, "Acme");
        assert_eq!(profile.description, "Acme builds widgets.");
        assert_eq!(profile.offerings, vec!["Widgets"]);
        assert!(profile.focus_areas.is_empty());
    }

    #[test]
    fn test_industry_serializes_as_label() {
        for industry in Industry::ALL {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{}\"", industry.label()));
            let parsed: Industry = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, industry);
        }
    }

    #[test]
    fn test_provider_id_parsing() {
        assert_eq!("OpenAI".parse::<ProviderId>().unwrap(), ProviderId::OpenAI);
        assert_eq!(" groq ".parse::<ProviderId>().unwrap(), ProviderId::Groq);
        assert!("gemini".parse::<ProviderId>().is_err());
    }

    #[test]
    fn test_use_case_report_markdown() {
        let report = UseCaseReport::new(
            vec!["Fraud detection".into(), "Chat assistant".into()],
            ReportSource::Template,
        );
        assert_eq!(report.to_markdown(), "- Fraud detection\n- Chat assistant");
    }
}
