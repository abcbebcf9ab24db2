//! Keyword-based industry classification

use shared::Industry;

/// Ordered (keywords → industry) rules; the first rule with any keyword
/// contained in the description wins
pub const INDUSTRY_RULES: &[(&[&str], Industry)] = &[
    (&["automotive", "vehicle"], Industry::Automotive),
    (&["bank", "finance"], Industry::Finance),
    (&["e-commerce", "retail", "shop"], Industry::ECommerceRetail),
    (&["software", "technology", "saas"], Industry::Technology),
    (&["entertainment", "media"], Industry::EntertainmentMedia),
    (&["health", "medical", "clinic"], Industry::Healthcare),
];

/// Map a free-text description onto the closed industry label set
pub fn classify(description: &str) -> Industry {
    let description = description.trim();
    if description.is_empty() {
        return Industry::GeneralIndustry;
    }

    let lowered = description.to_lowercase();
    INDUSTRY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, industry)| *industry)
        .unwrap_or(Industry::GeneralIndustry)
}
