use axum::response::Html;

/// GET /
///
/// Static landing marker.
pub async fn landing() -> Html<&'static str> {
    Html("<h1>Project Server</h1>")
}
