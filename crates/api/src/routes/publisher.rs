use axum::routing::get;
use axum::Router;

use crate::handlers::publisher;
use crate::state::AppState;

/// Publisher routes mounted at `/publishers`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(publisher::list))
}
