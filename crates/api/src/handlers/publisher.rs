//! Handlers for the `/publishers` resource.

use axum::extract::State;
use axum::Json;
use comicshelf_db::models::publisher::PublisherInfo;
use comicshelf_db::repositories::PublisherRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/publishers
///
/// Every publisher as an `{id, name}` pair. No filtering, no pagination.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PublisherInfo>>> {
    let publishers = PublisherRepo::list(&state.pool).await?;
    Ok(Json(publishers))
}
