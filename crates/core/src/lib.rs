//! Domain types and pure rules for the comic-book catalog.
//!
//! Nothing in this crate touches the database, the filesystem or HTTP; the
//! `db` and `api` crates build on these types.

pub mod catalog;
pub mod error;
pub mod search;
pub mod types;
pub mod upload;
