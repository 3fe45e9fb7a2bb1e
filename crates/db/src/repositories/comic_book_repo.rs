//! Repository for the `comic_books` table.
//!
//! Reads resolve the publisher with a `LEFT JOIN` and the genre names with a
//! second, explicit query keyed on the returned ids. Writes that touch the
//! junction table run inside a single transaction.

use comicshelf_core::catalog::UNKNOWN_PUBLISHER;
use comicshelf_core::search::contains_pattern;
use comicshelf_core::types::DbId;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::comic_book::{
    ComicBook, ComicBookSummary, ComicBookWithGenres, CreateComicBook, CreatedComicBook,
    UpdateComicBook,
};
use crate::models::comic_book_genre::CreateComicBookGenre;
use crate::repositories::{ComicBookGenreRepo, GenreRepo};

/// Column list for `comic_books` row queries.
const COLUMNS: &str =
    "id, title, publisher_id, rating, reviews, image_url, created_at, updated_at";

/// Select list + join producing [`ComicBookSummary`] rows, aliased as `cb`.
fn summary_select(source: &str) -> String {
    format!(
        "SELECT cb.id, cb.title, COALESCE(p.name, '{UNKNOWN_PUBLISHER}') AS publisher, \
                cb.rating, cb.reviews, cb.image_url \
         FROM {source} cb \
         LEFT JOIN publishers p ON p.id = cb.publisher_id"
    )
}

/// Provides CRUD operations for comic books.
pub struct ComicBookRepo;

impl ComicBookRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// List comic books ordered by id, optionally filtered by a
    /// case-insensitive substring of the title.
    ///
    /// An empty or absent search returns everything.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
    ) -> Result<Vec<ComicBookWithGenres>, sqlx::Error> {
        let select = summary_select("comic_books");
        let summaries = match search.and_then(contains_pattern) {
            Some(pattern) => {
                let query = format!("{select} WHERE cb.title ILIKE $1 ORDER BY cb.id");
                sqlx::query_as::<_, ComicBookSummary>(&query)
                    .bind(pattern)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!("{select} ORDER BY cb.id");
                sqlx::query_as::<_, ComicBookSummary>(&query)
                    .fetch_all(pool)
                    .await?
            }
        };

        Self::attach_genres(pool, summaries).await
    }

    /// Find a comic book summary (no genres) by id.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ComicBookSummary>, sqlx::Error> {
        let query = format!("{} WHERE cb.id = $1", summary_select("comic_books"));
        sqlx::query_as::<_, ComicBookSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a comic book by id, enriched with its genre names.
    pub async fn find_by_id_with_genres(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ComicBookWithGenres>, sqlx::Error> {
        match Self::find_summary(pool, id).await? {
            Some(summary) => {
                let mut enriched = Self::attach_genres(pool, vec![summary]).await?;
                Ok(enriched.pop())
            }
            None => Ok(None),
        }
    }

    /// Find the raw comic book row by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ComicBook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comic_books WHERE id = $1");
        sqlx::query_as::<_, ComicBook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the first comic book with an exact title match.
    pub async fn find_by_title(
        pool: &PgPool,
        title: &str,
    ) -> Result<Option<ComicBook>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM comic_books WHERE title = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, ComicBook>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    async fn attach_genres(
        pool: &PgPool,
        summaries: Vec<ComicBookSummary>,
    ) -> Result<Vec<ComicBookWithGenres>, sqlx::Error> {
        let ids: Vec<DbId> = summaries.iter().map(|s| s.id).collect();
        let mut names = ComicBookGenreRepo::genre_names_for(pool, &ids).await?;

        Ok(summaries
            .into_iter()
            .map(|comic_book| ComicBookWithGenres {
                genres: names.remove(&comic_book.id).unwrap_or_default(),
                comic_book,
            })
            .collect())
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a comic book row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateComicBook,
    ) -> Result<ComicBook, sqlx::Error> {
        let query = format!(
            "INSERT INTO comic_books (title, publisher_id, rating, reviews, image_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ComicBook>(&query)
            .bind(&input.title)
            .bind(input.publisher_id)
            .bind(input.rating)
            .bind(input.reviews)
            .bind(&input.image_url)
            .fetch_one(executor)
            .await
    }

    /// Insert a comic book and link it to each named genre, all-or-nothing.
    ///
    /// Each name is matched exactly against `genres.name`; names with no
    /// match are skipped and reported back. Every link carries the comic
    /// book's rating as its `user_rating`. Submitting a name twice links it
    /// twice.
    pub async fn create_with_genres(
        pool: &PgPool,
        input: &CreateComicBook,
        genre_names: &[String],
    ) -> Result<CreatedComicBook, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let comic_book = Self::create(&mut *tx, input).await?;

        let mut linked_genre_ids = Vec::new();
        let mut skipped_genres = Vec::new();
        for name in genre_names {
            match GenreRepo::find_by_name(&mut *tx, name).await? {
                Some(genre) => {
                    let link = CreateComicBookGenre {
                        comic_book_id: comic_book.id,
                        genre_id: genre.id,
                        user_rating: comic_book.rating,
                    };
                    ComicBookGenreRepo::create(&mut *tx, &link).await?;
                    linked_genre_ids.push(genre.id);
                }
                None => skipped_genres.push(name.clone()),
            }
        }

        tx.commit().await?;

        Ok(CreatedComicBook {
            comic_book,
            linked_genre_ids,
            skipped_genres,
        })
    }

    /// Update a comic book. Only non-`None` fields in `input` are applied;
    /// an empty `image_url` leaves the stored image untouched.
    ///
    /// Returns the refreshed summary, or `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComicBook,
    ) -> Result<Option<ComicBookSummary>, sqlx::Error> {
        let query = format!(
            "WITH updated AS ( \
                 UPDATE comic_books SET \
                     title = COALESCE($2, title), \
                     publisher_id = COALESCE($3, publisher_id), \
                     rating = COALESCE($4, rating), \
                     reviews = COALESCE($5, reviews), \
                     image_url = COALESCE(NULLIF($6, ''), image_url) \
                 WHERE id = $1 \
                 RETURNING * \
             ) {}",
            summary_select("updated")
        );
        sqlx::query_as::<_, ComicBookSummary>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.publisher_id)
            .bind(input.rating)
            .bind(input.reviews)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comic book after removing its genre associations, in one
    /// transaction. Returns `true` if the comic book existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let unlinked = ComicBookGenreRepo::delete_for_comic_book(&mut *tx, id).await?;

        let result = sqlx::query("DELETE FROM comic_books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(comic_book_id = id, unlinked, "Comic book deleted");
        Ok(true)
    }
}
