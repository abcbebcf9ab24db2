//! Encyclopedia mocks and sample documents

#![allow(dead_code)] // Not every test binary uses every fixture

use research::{MockEncyclopediaClient, UpstreamFailure};
use serde_json::{Value, json};

pub const TESLA_EXTRACT: &str =
    "Tesla, Inc. is an American multinational automotive and clean energy company headquartered in Austin, Texas.";

pub const TESLA_PAGE: &str = r#"<html><body>
<div class="hatnote">Not to be confused with Nikola Tesla.</div>
<p>Short.</p>
<p>Tesla, Inc. is an American multinational <b>automotive</b> and clean energy company.[1][2]</p>
</body></html>"#;

pub fn summary_with_extract(extract: &str) -> Value {
    json!({
        "type": "standard",
        "title": "Example",
        "extract": extract,
    })
}

pub fn disambiguation_summary(name: &str) -> Value {
    summary_with_extract(&format!("{name} may refer to: a company, a person, or a place in fiction."))
}

/// Encyclopedia where every lookup fails
pub fn unreachable_encyclopedia() -> MockEncyclopediaClient {
    let mut encyclopedia = MockEncyclopediaClient::new();
    encyclopedia
        .expect_fetch_summary()
        .times(1)
        .returning(|_| Err(UpstreamFailure::NotFound));
    encyclopedia
        .expect_fetch_page_html()
        .times(1)
        .returning(|_| Err(UpstreamFailure::NetworkError("connection refused".to_string())));
    encyclopedia
}

/// Encyclopedia whose summary answers with `summary` and whose page is
/// never requested
pub fn summary_only_encyclopedia(summary: Value) -> MockEncyclopediaClient {
    let mut encyclopedia = MockEncyclopediaClient::new();
    encyclopedia
        .expect_fetch_summary()
        .times(1)
        .returning(move |_| Ok(summary.clone()));
    encyclopedia.expect_fetch_page_html().never();
    encyclopedia
}
