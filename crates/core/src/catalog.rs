//! Catalog field rules shared by the create and update paths.
//!
//! Provides the display fallbacks used when a relation cannot be resolved,
//! the public image path rendering, and validation helpers that turn bad
//! input into [`CoreError::Validation`].

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Display fallbacks
   -------------------------------------------------------------------------- */

/// Publisher name rendered when a comic book's publisher cannot be resolved.
pub const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";

/// Genre name rendered when an association points at a missing genre.
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

/// Public URL prefix under which stored cover images are served.
pub const IMAGE_URL_PREFIX: &str = "/static/images";

/// Subdirectory of the static root that holds uploaded cover images.
pub const IMAGE_SUBDIR: &str = "images";

/// Rating used when the submitted value is absent or not a number.
pub const DEFAULT_RATING: f64 = 0.0;

/// Render a stored image filename as the public path clients fetch it from.
///
/// Returns `None` when no image was stored, so the JSON field serializes as
/// `null`.
pub fn image_path(image_url: Option<&str>) -> Option<String> {
    match image_url {
        Some(name) if !name.is_empty() => Some(format!("{IMAGE_URL_PREFIX}/{name}")),
        _ => None,
    }
}

/// Validate a comic book title. Any non-blank title is accepted.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    Ok(())
}

/// Validate a rating supplied as a number (JSON update path).
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !rating.is_finite() {
        return Err(CoreError::Validation("Rating must be a finite number".into()));
    }
    Ok(())
}

/// Validate a review count. Reviews can never go below zero.
pub fn validate_reviews(reviews: i32) -> Result<(), CoreError> {
    if reviews < 0 {
        return Err(CoreError::Validation(format!(
            "Reviews must be non-negative, got {reviews}"
        )));
    }
    Ok(())
}

/// Parse a rating submitted as a form field.
///
/// Absent, unparsable and non-finite values all fall back to
/// [`DEFAULT_RATING`] rather than failing the request.
pub fn parse_form_rating(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|r| r.is_finite())
        .unwrap_or(DEFAULT_RATING)
}

/// Parse the publisher id submitted as a form field.
pub fn parse_publisher_id(raw: Option<&str>) -> Result<i64, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("Publisher is required".into()))?;
    raw.parse::<i64>()
        .map_err(|_| CoreError::Validation(format!("Publisher id '{raw}' is not a valid id")))
}
