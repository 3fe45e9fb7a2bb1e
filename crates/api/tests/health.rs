//! Integration tests for the root-level routes and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, get, send, TestApp};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = TestApp::new(pool);
    let response = get(app.router(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: GET / returns the HTML landing marker
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn landing_page_returns_html_marker(pool: PgPool) {
    let app = TestApp::new(pool);
    let response = get(app.router(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(body_text(response).await, "<h1>Project Server</h1>");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = TestApp::new(pool);
    let response = get(app.router(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_static_file_returns_404(pool: PgPool) {
    let app = TestApp::new(pool);
    let response = get(app.router(), "/static/images/nope.webp").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = TestApp::new(pool);
    let response = get(app.router(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    let app = TestApp::new(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/comicbooks")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(app.router(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    let methods = headers
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(methods.contains("PUT"), "allowed methods: {methods}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_rejects_unlisted_origin(pool: PgPool) {
    let app = TestApp::new(pool);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/publishers")
        .header("Origin", "http://evil.test")
        .body(Body::empty())
        .unwrap();

    let response = send(app.router(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_headers_only_on_api_routes(pool: PgPool) {
    let app = TestApp::new(pool);

    for uri in ["/", "/health"] {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let response = send(app.router(), request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers().get("access-control-allow-origin").is_none(),
            "{uri} must not carry CORS headers"
        );
    }

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/publishers")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = send(app.router(), request).await;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}
