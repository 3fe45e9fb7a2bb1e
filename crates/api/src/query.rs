//! Query parameter types for API handlers.

use serde::Deserialize;

/// Title search parameters (`?search=`).
///
/// An absent or empty `search` lists everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
