//! Guestbook page. Static HTML; messages are loaded client-side from `/messages`.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn get_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
