//! Comic book <-> genre association model.

use comicshelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `comic_book_genres` junction table.
///
/// `user_rating` is the rating attached to this particular pairing and is
/// independent of the comic book's own rating.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComicBookGenre {
    pub id: DbId,
    pub comic_book_id: DbId,
    pub genre_id: DbId,
    pub user_rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for linking a comic book to a genre.
#[derive(Debug, Clone)]
pub struct CreateComicBookGenre {
    pub comic_book_id: DbId,
    pub genre_id: DbId,
    pub user_rating: f64,
}

/// Resolved genre name for one association, keyed by comic book.
#[derive(Debug, Clone, FromRow)]
pub struct GenreNameRow {
    pub comic_book_id: DbId,
    pub name: String,
}
