//! Comic book entity model, DTOs and read-side projections.

use comicshelf_core::catalog::image_path;
use comicshelf_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `comic_books` table.
///
/// `image_url` holds the bare stored filename, not the public path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComicBook {
    pub id: DbId,
    pub title: String,
    pub publisher_id: DbId,
    pub rating: f64,
    pub reviews: i32,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Read-side projections
// ---------------------------------------------------------------------------

/// A comic book joined with its publisher name.
///
/// This is the shape returned by the update endpoint. `publisher` falls back
/// to "Unknown Publisher" in SQL; `image_url` is rendered as
/// `/static/images/{filename}` (or `null`) when serialized.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ComicBookSummary {
    pub id: DbId,
    pub title: String,
    pub publisher: String,
    pub rating: f64,
    pub reviews: i32,
    #[serde(serialize_with = "serialize_image_path")]
    pub image_url: Option<String>,
}

/// A comic book summary enriched with its genre names, in association order.
///
/// This is the shape returned by list, search and get-by-id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComicBookWithGenres {
    #[serde(flatten)]
    pub comic_book: ComicBookSummary,
    pub genres: Vec<String>,
}

/// Outcome of creating a comic book together with its genre links.
#[derive(Debug, Clone)]
pub struct CreatedComicBook {
    pub comic_book: ComicBook,
    /// Genre ids that were linked, in submission order.
    pub linked_genre_ids: Vec<DbId>,
    /// Submitted genre names with no matching genre row.
    pub skipped_genres: Vec<String>,
}

fn serialize_image_path<S: Serializer>(
    image_url: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match image_path(image_url.as_deref()) {
        Some(path) => serializer.serialize_some(&path),
        None => serializer.serialize_none(),
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for inserting a comic book.
#[derive(Debug, Clone)]
pub struct CreateComicBook {
    pub title: String,
    pub publisher_id: DbId,
    pub rating: f64,
    pub reviews: i32,
    pub image_url: Option<String>,
}

/// DTO for a partial comic book update. Absent fields keep their values.
///
/// An empty `image_url` is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComicBook {
    pub title: Option<String>,
    pub publisher_id: Option<DbId>,
    pub rating: Option<f64>,
    pub reviews: Option<i32>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(image_url: Option<&str>) -> ComicBookSummary {
        ComicBookSummary {
            id: 1,
            title: "Redcoat (2024)".into(),
            publisher: "Image Comics".into(),
            rating: 9.0,
            reviews: 11,
            image_url: image_url.map(String::from),
        }
    }

    #[test]
    fn summary_renders_public_image_path() {
        let json = serde_json::to_value(summary(Some("num5.webp"))).unwrap();
        assert_eq!(json["image_url"], "/static/images/num5.webp");
        assert_eq!(json["publisher"], "Image Comics");
        assert!(json.get("genres").is_none());
    }

    #[test]
    fn summary_renders_null_without_image() {
        let json = serde_json::to_value(summary(None)).unwrap();
        assert!(json["image_url"].is_null());
    }

    #[test]
    fn genres_are_flattened_next_to_summary_fields() {
        let listing = ComicBookWithGenres {
            comic_book: summary(None),
            genres: vec!["Action".into()],
        };
        let json = serde_json::to_value(listing).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Redcoat (2024)");
        assert_eq!(json["genres"], serde_json::json!(["Action"]));
    }

    #[test]
    fn update_dto_accepts_partial_body() {
        let input: UpdateComicBook = serde_json::from_str(r#"{"rating": 8.1}"#).unwrap();
        assert_eq!(input.rating, Some(8.1));
        assert!(input.title.is_none());
        assert!(input.reviews.is_none());
    }
}
