//! Best-effort text extraction from upstream responses
//!
//! Pure functions over a parsed JSON document or an HTML page. Nothing
//! here returns an error: malformed input degrades to a rendered value
//! (JSON) or `None` (HTML).

use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// Default phrase marking encyclopedia disambiguation stubs
pub const DISAMBIGUATION_MARKER: &str = "may refer to";

/// Default minimum length of an acceptable description or paragraph
pub const MIN_DESCRIPTION_CHARS: usize = 40;

/// Containers that may wrap the answer one level down
const NESTED_CONTAINERS: &[&str] = &["message", "assistant", "answer"];

/// Text keys looked up inside a nested container
const NESTED_TEXT_FIELDS: &[&str] = &["content", "text"];

/// Top-level string fields tried after the nested answer paths
const ALTERNATE_FIELDS: &[&str] = &[
    "content",
    "text",
    "answer",
    "output",
    "extract",
    "description",
    "summary",
];

static CITATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:\d+|[a-z]|note \d+|citation needed)\]").expect("citation pattern is valid")
});

/// Filters applied to candidate paragraphs and descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlExtraction {
    pub disambiguation_marker: String,
    pub min_chars: usize,
}

impl Default for HtmlExtraction {
    fn default() -> Self {
        Self {
            disambiguation_marker: DISAMBIGUATION_MARKER.to_string(),
            min_chars: MIN_DESCRIPTION_CHARS,
        }
    }
}

impl HtmlExtraction {
    /// Whether `text` is long enough and not a disambiguation stub
    pub fn accepts(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || text.chars().count() < self.min_chars {
            return false;
        }
        let marker = self.disambiguation_marker.trim().to_lowercase();
        marker.is_empty() || !text.to_lowercase().contains(&marker)
    }
}

/// Outcome of JSON extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// Text found in a recognized field
    Field(String),
    /// No recognized field; the whole document rendered as a string
    Rendered(String),
}

impl Extracted {
    /// Text from a recognized field, discarding rendered fallbacks
    pub fn field(self) -> Option<String> {
        match self {
            Extracted::Field(text) => Some(text),
            Extracted::Rendered(_) => None,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Extracted::Field(text) | Extracted::Rendered(text) => text,
        }
    }
}

/// Pull the most useful string out of a JSON document of unknown shape
pub fn extract_json(value: &Value) -> Extracted {
    if let Some(text) = non_empty(value) {
        return Extracted::Field(text);
    }

    if let Some(text) = nested_answer(value) {
        return Extracted::Field(text);
    }

    for key in ALTERNATE_FIELDS {
        if let Some(text) = value.get(key).and_then(non_empty) {
            return Extracted::Field(text);
        }
    }

    Extracted::Rendered(value.to_string())
}

fn nested_answer(value: &Value) -> Option<String> {
    let choice = value.get("choices").and_then(|choices| choices.get(0));

    if let Some(choice) = choice {
        let chat = choice.pointer("/message/content").and_then(non_empty);
        let legacy = || choice.get("text").and_then(non_empty);
        if let Some(text) = chat.or_else(legacy) {
            return Some(text);
        }
    }

    NESTED_CONTAINERS
        .iter()
        .filter_map(|container| value.get(container))
        .filter(|inner| inner.is_object())
        .find_map(|inner| {
            NESTED_TEXT_FIELDS
                .iter()
                .find_map(|key| inner.get(key).and_then(non_empty))
        })
}

fn non_empty(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// First paragraph of an HTML page that passes the extraction filters
pub fn extract_html(html: &str, options: &HtmlExtraction) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").ok()?;

    document
        .select(&selector)
        .map(|paragraph| clean_paragraph(&paragraph.text().collect::<String>()))
        .find(|text| options.accepts(text))
}

/// Drop citation markers and collapse whitespace
fn clean_paragraph(raw: &str) -> String {
    let without_citations = CITATION_MARKER.replace_all(raw, "");
    without_citations.split_whitespace().collect::<Vec<_>>().join(" ")
}
