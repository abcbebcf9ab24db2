//! Prompt construction for each language-model call in the pipeline

use shared::{CompanyProfile, FieldKind};
use crate::types::CompletionRequest;

const DESCRIPTION_ROLE: &str = "You are a concise business copywriter.";
const OFFERINGS_ROLE: &str = "You are an expert product analyst.";
const FOCUS_AREAS_ROLE: &str = "You are a strategic business consultant.";
const USE_CASES_ROLE: &str = "You are a consultant specializing in AI for business.";

const DESCRIPTION_MAX_TOKENS: u32 = 180;
const FIELD_MAX_TOKENS: u32 = 120;
const USE_CASES_MAX_TOKENS: u32 = 420;

/// Ask for a short professional description of a company
pub fn description_request(company_name: &str) -> CompletionRequest {
    CompletionRequest::new(
        DESCRIPTION_ROLE,
        format!("Write a concise 2-3 line professional description about the company '{company_name}'."),
        DESCRIPTION_MAX_TOKENS,
    )
}

/// Ask for offerings or focus areas, one per line
pub fn field_request(kind: FieldKind, description: &str) -> CompletionRequest {
    match kind {
        FieldKind::Offerings => CompletionRequest::new(
            OFFERINGS_ROLE,
            format!(
                "Based on this company description, list 2-3 main products or services they offer. \
                 Return each on a new line:\n\n{description}"
            ),
            FIELD_MAX_TOKENS,
        ),
        FieldKind::FocusAreas => CompletionRequest::new(
            FOCUS_AREAS_ROLE,
            format!(
                "Suggest 2-3 strategic focus areas for the company based on this description:\n\n\
                 {description}\n\nReturn each focus area on a new line."
            ),
            FIELD_MAX_TOKENS,
        ),
    }
}

/// Ask for AI/ML/GenAI use cases tailored to a profile
pub fn use_case_request(profile: &CompanyProfile) -> CompletionRequest {
    let prompt = format!(
        "Analyze the following company and suggest concise AI/ML and Generative AI (GenAI) use cases \
         (return bullet points, each on its own line):\n\n\
         Industry: {industry}\n\
         Description: {description}\n\
         Offerings: {offerings}\n\
         Strategic Focus Areas: {focus_areas}\n\n\
         Please suggest:\n\
         - Practical AI/ML/GenAI solutions\n\
         - Improvements to customer experience, operations, supply chain\n\
         - Internal GenAI solutions (chatbots, automated reporting, document search)\n",
        industry = profile.industry,
        description = profile.description,
        offerings = join_or_none(&profile.offerings),
        focus_areas = join_or_none(&profile.focus_areas),
    );

    CompletionRequest::new(USE_CASES_ROLE, prompt, USE_CASES_MAX_TOKENS)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none identified)".to_string()
    } else {
        items.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Industry;

    #[test]
    fn test_field_requests_name_their_kind() {
        let offerings = field_request(FieldKind::Offerings, "Acme builds widgets.");
        assert!(offerings.prompt.contains("products or services"));
        assert!(offerings.prompt.ends_with("Acme builds widgets."));
        assert_eq!(offerings.system, OFFERINGS_ROLE);

        let focus = field_request(FieldKind::FocusAreas, "Acme builds widgets.");
        assert!(focus.prompt.contains("strategic focus areas"));
        assert_eq!(focus.max_tokens, FIELD_MAX_TOKENS);
    }

    #[test]
    fn test_use_case_request_embeds_profile() {
        let profile = CompanyProfile::new(
            "Acme",
            "Acme runs a retail bank.",
            vec!["Loans".into(), "Savings".into()],
            vec![],
            Industry::Finance,
        );

        let request = use_case_request(&profile);
        assert!(request.prompt.contains("Industry: Finance"));
        assert!(request.prompt.contains("Description: Acme runs a retail bank."));
        assert!(request.prompt.contains("Offerings: Loans; Savings"));
        assert!(request.prompt.contains("Strategic Focus Areas: (none identified)"));
        assert!(request.prompt.contains("document search"));
        assert_eq!(request.max_tokens, USE_CASES_MAX_TOKENS);
    }
}
