//! Handlers for the `/comicbooks` resource.
//!
//! List/search, get, multipart create (with cover upload and genre links),
//! partial JSON update, and delete (associations first).

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use comicshelf_core::catalog::{validate_rating, validate_reviews, validate_title};
use comicshelf_core::error::CoreError;
use comicshelf_core::types::DbId;
use comicshelf_db::models::comic_book::{
    ComicBookSummary, ComicBookWithGenres, CreateComicBook, UpdateComicBook,
};
use comicshelf_db::repositories::{ComicBookRepo, PublisherRepo};

use crate::error::{AppError, AppResult};
use crate::forms::RawComicBookForm;
use crate::query::SearchParams;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Comic book";

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/comicbooks?search=TEXT
///
/// List comic books, optionally filtered by a case-insensitive title
/// substring. A search with no hits returns an empty array.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ComicBookWithGenres>>> {
    let comic_books = ComicBookRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(comic_books))
}

/// GET /api/comicbooks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ComicBookWithGenres>> {
    let Path(id) = path?;
    let comic_book = ComicBookRepo::find_by_id_with_genres(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(comic_book))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /api/comicbooks (multipart)
///
/// Fields: `title`, `publisher`, `rating`, repeated `genres[]`, optional
/// `image` file. The cover is written to disk first, then the comic book
/// and its genre links are inserted in one transaction. Reviews always
/// start at 0. Genre names with no matching genre are skipped.
pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let form = RawComicBookForm::from_multipart(multipart?)
        .await?
        .validate()?;

    ensure_publisher_exists(&state, form.publisher_id).await?;

    let image_url = match &form.image {
        Some(upload) => {
            state.images.save(&upload.filename, &upload.data).await?;
            Some(upload.filename.clone())
        }
        None => None,
    };

    let input = CreateComicBook {
        title: form.title,
        publisher_id: form.publisher_id,
        rating: form.rating,
        reviews: 0,
        image_url,
    };
    let created = ComicBookRepo::create_with_genres(&state.pool, &input, &form.genres).await?;
    let comic_book_id = created.comic_book.id;

    for genre in &created.skipped_genres {
        tracing::warn!(comic_book_id, genre = %genre, "Genre not found, skipping link");
    }

    tracing::info!(
        comic_book_id,
        linked = created.linked_genre_ids.len(),
        skipped = created.skipped_genres.len(),
        "Comic book created",
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::with_id(
            "Comic book added successfully!",
            comic_book_id,
        )),
    ))
}

/// PUT /api/comicbooks/{id} (JSON)
///
/// Overwrite only the fields present in the body. Returns the updated
/// summary without the genre list.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateComicBook>, JsonRejection>,
) -> AppResult<Json<ComicBookSummary>> {
    let Path(id) = path?;
    let Json(input) = payload?;

    validate_update(&input)?;
    if let Some(publisher_id) = input.publisher_id {
        ensure_publisher_exists(&state, publisher_id).await?;
    }

    let comic_book = ComicBookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    tracing::info!(comic_book_id = id, "Comic book updated");

    Ok(Json(comic_book))
}

/// DELETE /api/comicbooks/{id}
///
/// Remove the comic book's genre links, then the comic book itself.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = path?;

    if !ComicBookRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }

    tracing::info!(comic_book_id = id, "Comic book deleted");

    Ok(Json(MessageResponse::new("Comic book deleted successfully!")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Field-level checks for a partial update. Absent fields are not checked.
fn validate_update(input: &UpdateComicBook) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    if let Some(reviews) = input.reviews {
        validate_reviews(reviews)?;
    }
    Ok(())
}

async fn ensure_publisher_exists(state: &AppState, publisher_id: DbId) -> AppResult<()> {
    if !PublisherRepo::exists(&state.pool, publisher_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Publisher with id {publisher_id} does not exist"
        ))));
    }
    Ok(())
}
