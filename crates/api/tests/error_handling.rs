//! Tests for `AppError` → HTTP response mapping.
//!
//! Most tests call `IntoResponse` directly on `AppError` values. The last
//! one drives a real storage failure through the router.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use comicshelf_api::error::{AppError, INTERNAL_ERROR_MESSAGE};
use comicshelf_core::error::CoreError;
use common::{body_json, create_comic_book, get, insert_publisher, MultipartForm, TestApp};
use http_body_util::BodyExt;
use sqlx::PgPool;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::not_found("Comic book", 42);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Comic book with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Title is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Title is required");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn not_found_path_error_returns_404() {
    let err = AppError::NotFound("Cannot parse `abc` to a `i64`".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Cannot parse `abc` to a `i64`");
}

// ---------------------------------------------------------------------------
// Test: internal errors are opaque
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_hides_details() {
    let err = AppError::InternalError("disk on fire at /var/lib".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn core_internal_error_hides_details() {
    let err = AppError::Core(CoreError::Internal("connection refused".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal Server Error");
}

// ---------------------------------------------------------------------------
// Test: sqlx errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_error_returns_opaque_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
}

// ---------------------------------------------------------------------------
// Test: a storage failure inside a handler surfaces as the opaque 500
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn storage_failure_returns_internal_server_error(pool: PgPool) {
    let app = TestApp::new(pool);
    let dc = insert_publisher(&app.pool, "DC Comics").await;
    create_comic_book(
        &app,
        MultipartForm::new()
            .text("title", "Batman")
            .text("publisher", &dc.to_string()),
    )
    .await;

    sqlx::query("DROP TABLE comic_book_genres")
        .execute(&app.pool)
        .await
        .unwrap();

    let response = get(app.router(), "/api/comicbooks").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Internal Server Error");
    assert_eq!(json["code"], "INTERNAL_ERROR");
}
