//! Offerings and focus areas derived from a free-text description

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use shared::{FieldKind, MAX_LIST_ITEMS, normalize_list};
use crate::core::fallback::{Attempts, Outcome, StepFailure};
use crate::core::listing::parse_model_list;
use crate::core::prompt::field_request;
use crate::traits::LanguageModel;

/// Shortest fragment the offerings heuristic keeps
const MIN_FRAGMENT_CHARS: usize = 10;

/// Length of the single-item offerings fallback
const OFFERING_TRUNCATE_CHARS: usize = 140;

/// Focus vocabulary scanned in order, with display labels
const FOCUS_VOCABULARY: &[(&str, &str)] = &[
    ("cloud", "Cloud Infrastructure"),
    ("ai", "AI / Machine Learning"),
    ("ml", "AI / Machine Learning"),
    ("mobile", "Mobile & Apps"),
    ("saas", "SaaS / Platform"),
    ("hardware", "Hardware / Devices"),
    ("biotech", "Biotech / Life Sciences"),
    ("health", "Healthcare Solutions"),
    ("finance", "Financial Services"),
    ("e-commerce", "E-commerce / Retail"),
    ("logistics", "Logistics / Supply Chain"),
    ("security", "Security / Privacy"),
    ("analytics", "Data Analytics"),
];

const GENERIC_FOCUS_AREAS: [&str; 3] = [
    "Product/Market Fit",
    "Customer Experience",
    "Operational Efficiency",
];

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.\n]").expect("sentence pattern is valid"));

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",| and | & |;|-").expect("separator pattern is valid"));

/// Derives short lists from a description with the model, falling back
/// to deterministic heuristics
#[derive(Debug, Default, Clone)]
pub struct FieldGenerator;

impl FieldGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Up to three items of `kind`; never fails
    pub async fn generate<L>(&self, model: &L, description: &str, kind: FieldKind) -> Outcome<Vec<String>>
    where
        L: LanguageModel + ?Sized,
    {
        let mut attempts = Attempts::new(kind.stage());

        let from_model = match model.complete(field_request(kind, description)).await {
            Ok(answer) => {
                let items = parse_model_list(&answer);
                if items.is_empty() {
                    Err(StepFailure::rejected("model answer had no list items"))
                } else {
                    Ok(items)
                }
            }
            Err(failure) => Err(failure.into()),
        };

        let items = match attempts.settle("model", from_model) {
            Some(items) => items,
            None => heuristic(kind, description),
        };

        attempts.finish(items)
    }
}

/// Deterministic fallback for `kind`
pub fn heuristic(kind: FieldKind, description: &str) -> Vec<String> {
    match kind {
        FieldKind::Offerings => heuristic_offerings(description),
        FieldKind::FocusAreas => heuristic_focus_areas(description),
    }
}

/// Sentence and list-separator fragments of at least ten characters,
/// or the truncated description when none qualify
pub fn heuristic_offerings(description: &str) -> Vec<String> {
    let description = description.trim();
    if description.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    'sentences: for sentence in SENTENCE_BREAK.split(description) {
        for fragment in LIST_SEPARATOR.split(sentence) {
            let fragment = fragment.trim();
            if fragment.chars().count() >= MIN_FRAGMENT_CHARS && seen.insert(fragment.to_lowercase()) {
                candidates.push(fragment.to_string());
            }
            if candidates.len() >= MAX_LIST_ITEMS {
                break 'sentences;
            }
        }
    }

    if candidates.is_empty() {
        return vec![description.chars().take(OFFERING_TRUNCATE_CHARS).collect()];
    }
    candidates
}

/// Labels for vocabulary words present in the description, or a generic
/// trio when nothing matches
pub fn heuristic_focus_areas(description: &str) -> Vec<String> {
    let lowered = description.to_lowercase();
    let labels = FOCUS_VOCABULARY
        .iter()
        .filter(|(keyword, _)| contains_word(&lowered, keyword))
        .map(|(_, label)| *label);

    let found = normalize_list(labels);
    if found.is_empty() {
        return GENERIC_FOCUS_AREAS.iter().map(|label| label.to_string()).collect();
    }
    found
}

/// Whether `needle` starts a word in `haystack`, so "healthcare" matches
/// "health" but "retail" does not match "ai"; `needle` must be lowercase
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        !before.is_some_and(char::is_alphanumeric)
    })
}
