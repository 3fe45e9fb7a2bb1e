//! Destructive bootstrap of the demo catalog.
//!
//! [`seed_catalog`] wipes the schema, recreates it and loads a fixed dataset
//! of genres, publishers, comic books and genre links. Cross references in
//! the dataset are by name and are resolved against the rows inserted in the
//! same run; anything that fails to resolve is logged and skipped.

use std::collections::HashMap;

use comicshelf_core::types::DbId;

use crate::models::comic_book::CreateComicBook;
use crate::models::comic_book_genre::CreateComicBookGenre;
use crate::repositories::{ComicBookGenreRepo, ComicBookRepo, GenreRepo, PublisherRepo};
use crate::{reset_schema, DbPool};

/// A comic book in the seed dataset, referencing its publisher by name.
#[derive(Debug, Clone, Copy)]
pub struct SeedComicBook {
    pub title: &'static str,
    pub publisher: &'static str,
    pub rating: f64,
    pub reviews: i32,
    pub image_url: &'static str,
}

/// A comic book <-> genre link in the seed dataset, by names.
#[derive(Debug, Clone, Copy)]
pub struct SeedComicBookGenre {
    pub comic_book_title: &'static str,
    pub genre_name: &'static str,
    pub user_rating: f64,
}

pub const GENRES: &[&str] = &["Action", "Adventure", "Fantasy", "Science Fiction", "Horror"];

pub const PUBLISHERS: &[&str] = &[
    "Boom! Studios",
    "DC Comics",
    "Image Comics",
    "Dynamite Entertainment",
    "Marvel Comics",
];

const fn comic(
    title: &'static str,
    publisher: &'static str,
    rating: f64,
    reviews: i32,
    image_url: &'static str,
) -> SeedComicBook {
    SeedComicBook {
        title,
        publisher,
        rating,
        reviews,
        image_url,
    }
}

const fn link(
    comic_book_title: &'static str,
    genre_name: &'static str,
    user_rating: f64,
) -> SeedComicBookGenre {
    SeedComicBookGenre {
        comic_book_title,
        genre_name,
        user_rating,
    }
}

pub const COMIC_BOOKS: &[SeedComicBook] = &[
    comic("Something is Killing the Children", "Boom! Studios", 9.2, 17, "num1.webp"),
    comic("Blue Beetle (2023)", "DC Comics", 9.2, 10, "num2.webp"),
    comic("Zatanna: Bring Down The House (2024)", "DC Comics", 9.1, 14, "num3.webp"),
    comic("The Boy Wonder (2024)", "DC Comics", 9.0, 37, "num4.webp"),
    comic("Redcoat (2024)", "Image Comics", 9.0, 11, "num5.webp"),
    comic("Transformers (2023)", "Image Comics", 8.9, 34, "num6.webp"),
    comic("Batman / Superman: World's Finest (2022)", "DC Comics", 8.8, 36, "num7.webp"),
    comic("Local Man (2023)", "Image Comics", 8.8, 18, "num8.webp"),
    comic("Rook Exodus (2024)", "Image Comics", 8.8, 16, "num9.webp"),
    comic("Space Ghost (2024)", "Dynamite Entertainment", 8.7, 47, "num10.webp"),
    comic("Superman (2023)", "DC Comics", 8.7, 29, "num11.webp"),
    comic("Green Lantern (2023)", "DC Comics", 8.7, 27, "num12.webp"),
    comic("Dracula: Blood Hunt (2024)", "Marvel Comics", 8.7, 16, "num13.webp"),
    comic("My Adventures with Superman (2024)", "DC Comics", 8.7, 15, "num14.webp"),
    comic("Deadpool & Wolverine: WWIII (2024)", "Marvel Comics", 8.7, 11, "num15.webp"),
    comic("Aint No Grave (2024)", "Image Comics", 8.6, 29, "num16.webp"),
    comic("Void Rivals (2023)", "Image Comics", 8.6, 25, "num17.webp"),
    comic("Ultimate Spider-Man (2024)", "Marvel Comics", 8.5, 33, "num18.webp"),
    comic("Ultimates (2024)", "Marvel Comics", 8.5, 26, "num19.webp"),
    comic(
        "Batman: Gotham by Gaslight - The Kryptonian Age (2024)",
        "DC Comics",
        8.5,
        25,
        "num20.webp",
    ),
];

pub const COMIC_BOOK_GENRES: &[SeedComicBookGenre] = &[
    link("Something is Killing the Children", "Horror", 9.0),
    link("Blue Beetle (2023)", "Action", 8.0),
    link("Zatanna: Bring Down The House (2024)", "Fantasy", 8.0),
    link("The Boy Wonder (2024)", "Adventure", 7.0),
    link("Redcoat (2024)", "Action", 8.0),
    link("Transformers (2023)", "Science Fiction", 8.0),
    link("Batman / Superman: World's Finest (2022)", "Action", 8.0),
    link("Local Man (2023)", "Adventure", 7.0),
    link("Rook Exodus (2024)", "Fantasy", 8.0),
    link("Space Ghost (2024)", "Science Fiction", 7.0),
    link("Superman (2023)", "Action", 8.0),
    link("Green Lantern (2023)", "Science Fiction", 8.0),
    link("Dracula: Blood Hunt (2024)", "Horror", 7.0),
    link("My Adventures with Superman (2024)", "Adventure", 8.0),
    link("Deadpool & Wolverine: WWIII (2024)", "Action", 8.0),
    link("Aint No Grave (2024)", "Fantasy", 8.0),
    link("Void Rivals (2023)", "Science Fiction", 8.0),
    link("Ultimate Spider-Man (2024)", "Action", 8.0),
    link("Ultimates (2024)", "Science Fiction", 7.0),
    link(
        "Batman: Gotham by Gaslight - The Kryptonian Age (2024)",
        "Action",
        8.0,
    ),
];

/// Row counts produced by one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub genres: usize,
    pub publishers: usize,
    pub comic_books: usize,
    pub comic_book_genres: usize,
    /// Comic books or links dropped because a name did not resolve.
    pub skipped: usize,
}

/// Reset the schema and load the built-in dataset.
pub async fn seed_catalog(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    seed_with(pool, GENRES, PUBLISHERS, COMIC_BOOKS, COMIC_BOOK_GENRES).await
}

/// Reset the schema and load an arbitrary dataset.
///
/// Each row is committed on its own; a failure part-way leaves the rows
/// inserted so far.
pub async fn seed_with(
    pool: &DbPool,
    genres: &[&str],
    publishers: &[&str],
    comic_books: &[SeedComicBook],
    links: &[SeedComicBookGenre],
) -> Result<SeedReport, sqlx::Error> {
    reset_schema(pool).await?;

    let mut report = SeedReport::default();

    tracing::info!("Seeding genres");
    let mut genre_ids: HashMap<&str, DbId> = HashMap::new();
    for &name in genres {
        let genre = GenreRepo::create(pool, name).await?;
        genre_ids.insert(name, genre.id);
    }
    report.genres = genre_ids.len();
    tracing::info!(?genre_ids, "Genres seeded");

    tracing::info!("Seeding publishers");
    let mut publisher_ids: HashMap<&str, DbId> = HashMap::new();
    for &name in publishers {
        let publisher = PublisherRepo::create(pool, name).await?;
        publisher_ids.insert(name, publisher.id);
    }
    report.publishers = publisher_ids.len();
    tracing::info!(?publisher_ids, "Publishers seeded");

    tracing::info!("Seeding comic books");
    let mut comic_ids: HashMap<&str, DbId> = HashMap::new();
    for seed in comic_books {
        let Some(&publisher_id) = publisher_ids.get(seed.publisher) else {
            tracing::warn!(
                title = seed.title,
                publisher = seed.publisher,
                "Publisher not found for comic book, skipping"
            );
            report.skipped += 1;
            continue;
        };

        let input = CreateComicBook {
            title: seed.title.to_string(),
            publisher_id,
            rating: seed.rating,
            reviews: seed.reviews,
            image_url: Some(seed.image_url.to_string()),
        };
        let comic_book = ComicBookRepo::create(pool, &input).await?;
        comic_ids.insert(seed.title, comic_book.id);
        report.comic_books += 1;
    }
    tracing::info!(count = report.comic_books, "Comic books seeded");

    tracing::info!("Seeding comic book genres");
    for seed in links {
        let (Some(&comic_book_id), Some(&genre_id)) = (
            comic_ids.get(seed.comic_book_title),
            genre_ids.get(seed.genre_name),
        ) else {
            tracing::warn!(
                title = seed.comic_book_title,
                genre = seed.genre_name,
                "Comic book or genre not found, skipping link"
            );
            report.skipped += 1;
            continue;
        };

        let input = CreateComicBookGenre {
            comic_book_id,
            genre_id,
            user_rating: seed.user_rating,
        };
        ComicBookGenreRepo::create(pool, &input).await?;
        report.comic_book_genres += 1;
    }
    tracing::info!(count = report.comic_book_genres, "Comic book genres seeded");

    Ok(report)
}
