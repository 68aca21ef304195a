//! GET / — the embedded single-page UI.

use axum::response::Html;

/// Serves the interactive page (graph, summary, activity chart).
///
/// The page is compiled into the binary; there is no asset pipeline.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
