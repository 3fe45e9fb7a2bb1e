//! Persistence layer for the comic-book catalog.
//!
//! Owns the Postgres schema (embedded migrations), row models and DTOs,
//! the repository structs, and the destructive seed loader.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Tables owned by the catalog schema, children before parents.
const CATALOG_TABLES: &[&str] = &["comic_book_genres", "comic_books", "genres", "publishers"];

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Drop every catalog table and the migration ledger, then re-apply the
/// migrations from scratch.
///
/// Irreversible. Only the seed loader calls this.
pub async fn reset_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for table in CATALOG_TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE"))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DROP FUNCTION IF EXISTS trigger_set_updated_at() CASCADE")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!("Catalog schema dropped");

    run_migrations(pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

    tracing::info!("Catalog schema recreated");
    Ok(())
}
