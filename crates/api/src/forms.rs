//! Typed input for the multipart comic book create form.
//!
//! The form is read field by field into a [`RawComicBookForm`], then
//! validated in one place into a [`NewComicBookForm`]. Every validation
//! failure surfaces as [`CoreError::Validation`].

use axum::body::Bytes;
use axum::extract::Multipart;
use comicshelf_core::catalog::{parse_form_rating, parse_publisher_id, validate_title};
use comicshelf_core::error::CoreError;
use comicshelf_core::types::DbId;
use comicshelf_core::upload::sanitize_filename;

use crate::error::AppResult;

/// An uploaded image as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub data: Bytes,
}

/// Form fields as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawComicBookForm {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub rating: Option<String>,
    pub genres: Vec<String>,
    pub image: Option<ImageUpload>,
}

/// A validated create request.
#[derive(Debug, Clone)]
pub struct NewComicBookForm {
    pub title: String,
    pub publisher_id: DbId,
    pub rating: f64,
    /// Genre names in submission order.
    pub genres: Vec<String>,
    /// Image with its filename already sanitised.
    pub image: Option<ImageUpload>,
}

impl RawComicBookForm {
    /// Read every known field from a multipart stream. Unknown fields are
    /// ignored; an image part with an empty filename counts as no image.
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut raw = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "title" => raw.title = Some(field.text().await?),
                "publisher" | "publisher_id" => raw.publisher = Some(field.text().await?),
                "rating" => raw.rating = Some(field.text().await?),
                "genres[]" | "genres" => raw.genres.push(field.text().await?),
                "image" => {
                    let filename = field.file_name().unwrap_or("").to_string();
                    let data = field.bytes().await?;
                    if !filename.is_empty() {
                        raw.image = Some(ImageUpload { filename, data });
                    }
                }
                _ => {}
            }
        }

        Ok(raw)
    }

    /// Validate and normalise the submitted fields.
    ///
    /// - `title` must be present and non-blank.
    /// - `publisher` must be present and numeric.
    /// - `rating` falls back to `0.0` when absent or unparsable.
    /// - the image filename must survive sanitising.
    pub fn validate(self) -> Result<NewComicBookForm, CoreError> {
        let title = self.title.unwrap_or_default();
        validate_title(&title)?;

        let publisher_id = parse_publisher_id(self.publisher.as_deref())?;
        let rating = parse_form_rating(self.rating.as_deref());

        let image = match self.image {
            Some(upload) => {
                let filename = sanitize_filename(&upload.filename).ok_or_else(|| {
                    CoreError::Validation(format!(
                        "Image filename '{}' is not usable",
                        upload.filename
                    ))
                })?;
                Some(ImageUpload {
                    filename,
                    data: upload.data,
                })
            }
            None => None,
        };

        Ok(NewComicBookForm {
            title,
            publisher_id,
            rating,
            genres: self.genres,
            image,
        })
    }
}
