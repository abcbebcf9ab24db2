//! Embedded front page

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the research form for the root path
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
