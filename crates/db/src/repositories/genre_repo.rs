//! Repository for the `genres` table.

use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::genre::Genre;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides genre lookups plus the insert used by seeding.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by exact (case-sensitive) name.
    ///
    /// Genre names are not unique; the lowest id wins.
    pub async fn find_by_name<'e>(
        executor: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// List all genres ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }
}
