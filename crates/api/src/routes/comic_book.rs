//! Route definitions for the comic book resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::comic_book;
use crate::state::AppState;

/// Comic book routes mounted at `/comicbooks`.
///
/// ```text
/// GET    /        -> list (optional ?search=)
/// POST   /        -> create (multipart)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (JSON)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comic_book::list).post(comic_book::create))
        .route(
            "/{id}",
            get(comic_book::get_by_id)
                .put(comic_book::update)
                .delete(comic_book::delete),
        )
}
