//! One-shot loader for the demo catalog.
//!
//! Drops and recreates the whole schema, then inserts the built-in dataset.
//! Run out-of-band; the server never calls this.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comicshelf_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comicshelf_seed=info,comicshelf_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Invalid configuration")?;

    let pool = comicshelf_db::create_pool(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::warn!("Dropping and recreating the catalog schema");
    let report = comicshelf_db::seed::seed_catalog(&pool)
        .await
        .context("Seeding failed")?;

    tracing::info!(
        genres = report.genres,
        publishers = report.publishers,
        comic_books = report.comic_books,
        comic_book_genres = report.comic_book_genres,
        skipped = report.skipped,
        "Catalog seeded",
    );

    pool.close().await;
    Ok(())
}
