//! Publisher entity model.

use comicshelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `publishers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Publisher {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The `{id, name}` pair returned by the publisher listing.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PublisherInfo {
    pub id: DbId,
    pub name: String,
}
