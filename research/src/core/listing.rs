//! Line-list parsing for language-model answers

use regex::Regex;
use std::sync::LazyLock;

use shared::normalize_list;

static BULLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-•]+\s*|\*+\s+|\d+[.)]\s*)").expect("bullet pattern is valid")
});

/// Strip any leading run of bullet/numbering characters
/// (`-`, `•`, `*`, digits, `.`, `)`, whitespace)
pub fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        matches!(c, '-' | '•' | '*' | '.' | ')') || c.is_ascii_digit() || c.is_whitespace()
    })
    .trim_end()
}

/// Split a model answer into at most three short items, one per line
pub fn parse_model_list(text: &str) -> Vec<String> {
    normalize_list(
        text.lines()
            .map(strip_list_marker)
            .filter(|line| !line.is_empty()),
    )
}

/// Split a model answer into report lines, removing list bullets; `*`
/// only counts as a bullet when followed by whitespace so markdown
/// emphasis survives
pub fn parse_report_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| BULLET_PREFIX.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
