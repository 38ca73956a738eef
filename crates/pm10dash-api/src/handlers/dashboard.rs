use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../../assets/index.html");

/// Single-page dashboard; the "Show Data" button calls `/api/v1/density`
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
