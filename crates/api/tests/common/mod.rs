#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use comicshelf_api::config::ServerConfig;
use comicshelf_api::router::build_app_router;
use comicshelf_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults, serving static files
/// from `static_dir`.
pub fn test_config(static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        secret_key: "test-secret".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        static_dir: static_dir.to_path_buf(),
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
    }
}

/// A database pool plus a throwaway static directory.
///
/// Each call to [`TestApp::router`] builds a fresh router (requests consume
/// the router via `oneshot`) over the same pool and directory.
pub struct TestApp {
    pub pool: PgPool,
    pub static_dir: TempDir,
}

impl TestApp {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            static_dir: tempfile::tempdir().expect("create temp static dir"),
        }
    }

    /// Build the full application router with all middleware layers, the
    /// same way `main.rs` does.
    pub fn router(&self) -> Router {
        let config = test_config(self.static_dir.path());
        let state = AppState::new(self.pool.clone(), config.clone());
        build_app_router(state, &config)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_multipart(app: Router, uri: &str, form: MultipartForm) -> Response<Body> {
    let (content_type, body) = form.finish();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart builder
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "comicshelf-test-boundary";

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={BOUNDARY}"),
            self.body,
        )
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a publisher directly and return its id.
pub async fn insert_publisher(pool: &PgPool, name: &str) -> i64 {
    comicshelf_db::repositories::PublisherRepo::create(pool, name)
        .await
        .unwrap()
        .id
}

/// Insert a genre directly and return its id.
pub async fn insert_genre(pool: &PgPool, name: &str) -> i64 {
    comicshelf_db::repositories::GenreRepo::create(pool, name)
        .await
        .unwrap()
        .id
}

/// Create a comic book through the API and return its id.
pub async fn create_comic_book(app: &TestApp, form: MultipartForm) -> i64 {
    let response = post_multipart(app.router(), "/api/comicbooks", form).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
