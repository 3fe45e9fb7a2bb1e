pub mod comic_book;
pub mod health;
pub mod publisher;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /comicbooks                    list/search (GET), create (POST, multipart)
/// /comicbooks/{id}               get (GET), update (PUT), delete (DELETE)
///
/// /publishers                    list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/comicbooks", comic_book::router())
        .nest("/publishers", publisher::router())
}
