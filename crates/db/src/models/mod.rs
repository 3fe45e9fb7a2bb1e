//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs where the entity is writable
//! - Read-side projections returned by the API

pub mod comic_book;
pub mod comic_book_genre;
pub mod genre;
pub mod publisher;
