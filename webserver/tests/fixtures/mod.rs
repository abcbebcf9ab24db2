//! Test fixtures

#![allow(dead_code)]

use chrono::Utc;
use shared::{CompanyProfile, Industry, ReportSource, RunId, RunReport, UseCaseReport};

/// Report a researcher might return for `company`
pub fn sample_report(company: &str) -> RunReport {
    RunReport {
        run_id: RunId::new(),
        company: company.to_string(),
        profile: CompanyProfile::new(
            company,
            format!("{company} builds developer software."),
            vec!["Code hosting".to_string()],
            vec!["AI / Machine Learning".to_string()],
            Industry::Technology,
        ),
        use_cases: UseCaseReport::new(
            vec!["Code review assistant".to_string(), "Incident summarization".to_string()],
            ReportSource::Model,
        ),
        diagnostics: Vec::new(),
        generated_at: Utc::now(),
    }
}
