//! Repository for the `comic_book_genres` junction table.

use std::collections::HashMap;

use comicshelf_core::catalog::UNKNOWN_GENRE;
use comicshelf_core::types::DbId;
use sqlx::postgres::PgExecutor;

use crate::models::comic_book_genre::{ComicBookGenre, CreateComicBookGenre, GenreNameRow};

const COLUMNS: &str = "id, comic_book_id, genre_id, user_rating, created_at, updated_at";

/// Provides association inserts, deletes and genre-name lookups.
pub struct ComicBookGenreRepo;

impl ComicBookGenreRepo {
    /// Link a comic book to a genre. Duplicate pairs are allowed.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateComicBookGenre,
    ) -> Result<ComicBookGenre, sqlx::Error> {
        let query = format!(
            "INSERT INTO comic_book_genres (comic_book_id, genre_id, user_rating) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ComicBookGenre>(&query)
            .bind(input.comic_book_id)
            .bind(input.genre_id)
            .bind(input.user_rating)
            .fetch_one(executor)
            .await
    }

    /// List the association rows for one comic book, in insertion order.
    pub async fn list_for_comic_book<'e>(
        executor: impl PgExecutor<'e>,
        comic_book_id: DbId,
    ) -> Result<Vec<ComicBookGenre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comic_book_genres WHERE comic_book_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ComicBookGenre>(&query)
            .bind(comic_book_id)
            .fetch_all(executor)
            .await
    }

    /// Delete every association row referencing a comic book.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_for_comic_book<'e>(
        executor: impl PgExecutor<'e>,
        comic_book_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comic_book_genres WHERE comic_book_id = $1")
            .bind(comic_book_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Resolve genre names for a batch of comic books.
    ///
    /// Names are grouped per comic book in association order. Associations
    /// whose genre row is missing resolve to "Unknown Genre". Comic books
    /// without associations are absent from the map.
    pub async fn genre_names_for<'e>(
        executor: impl PgExecutor<'e>,
        comic_book_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<String>>, sqlx::Error> {
        if comic_book_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = format!(
            "SELECT cbg.comic_book_id, COALESCE(g.name, '{UNKNOWN_GENRE}') AS name \
             FROM comic_book_genres cbg \
             LEFT JOIN genres g ON g.id = cbg.genre_id \
             WHERE cbg.comic_book_id = ANY($1) \
             ORDER BY cbg.id"
        );
        let rows = sqlx::query_as::<_, GenreNameRow>(&query)
            .bind(comic_book_ids)
            .fetch_all(executor)
            .await?;

        let mut grouped: HashMap<DbId, Vec<String>> = HashMap::new();
        for row in rows {
            grouped.entry(row.comic_book_id).or_default().push(row.name);
        }
        Ok(grouped)
    }
}
