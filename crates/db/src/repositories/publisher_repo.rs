//! Repository for the `publishers` table.

use comicshelf_core::types::DbId;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::publisher::{Publisher, PublisherInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides read access to publishers plus the insert used by seeding.
pub struct PublisherRepo;

impl PublisherRepo {
    /// Insert a new publisher, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Publisher, sqlx::Error> {
        let query = format!("INSERT INTO publishers (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Publisher>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List every publisher as an `{id, name}` pair, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<PublisherInfo>, sqlx::Error> {
        sqlx::query_as::<_, PublisherInfo>("SELECT id, name FROM publishers ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find a publisher by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Publisher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publishers WHERE id = $1");
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a publisher with the given ID exists.
    pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM publishers WHERE id = $1)")
                .bind(id)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }
}
