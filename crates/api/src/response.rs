//! Shared response body types for API handlers.
//!
//! Reads return the resource JSON directly; writes that have no resource to
//! return answer with a [`MessageResponse`].

use comicshelf_core::types::DbId;
use serde::Serialize;

/// `{ "message": ... }` acknowledgement, optionally carrying the affected id.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }

    pub fn with_id(message: &'static str, id: DbId) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }
}
