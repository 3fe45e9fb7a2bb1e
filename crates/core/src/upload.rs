//! Sanitising of client-supplied upload filenames.
//!
//! Uploaded cover images are stored flat under the image directory using a
//! name derived from what the client sent. The derived name never contains
//! path separators, never starts with a dot and only uses `[A-Za-z0-9._-]`.

use unicode_normalization::UnicodeNormalization;

/// Reduce a client-supplied filename to a safe, flat filename.
///
/// Accented letters are decomposed (NFKD) so their ASCII base survives;
/// anything still non-ASCII is dropped. Path separators become spaces,
/// whitespace runs become `_`, other unsafe characters are dropped and
/// leading/trailing `.`/`_` are stripped. Returns `None` when nothing usable
/// remains.
///
/// ```
/// use comicshelf_core::upload::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My Cover.png").as_deref(), Some("My_Cover.png"));
/// assert_eq!(sanitize_filename("../../etc/passwd").as_deref(), Some("etc_passwd"));
/// assert_eq!(sanitize_filename("café.png").as_deref(), Some("cafe.png"));
/// assert_eq!(sanitize_filename("..."), None);
/// ```
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let spaced: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
