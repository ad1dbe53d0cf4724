#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use luct_api::config::{ServerConfig, DEFAULT_DATABASE_URL};
use luct_api::router::build_app_router;
use luct_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: DEFAULT_DATABASE_URL.to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed the reference data, then build the app.
pub async fn build_seeded_app(pool: SqlitePool) -> Router {
    luct_db::seed::seed_reference_data(&pool)
        .await
        .expect("seeding should succeed");
    build_test_app(pool)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send `body` unchanged, with an optional content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A complete report submission for `course_code` with the given attendance.
pub fn report_body(course_code: &str, present: i64, registered: i64) -> Value {
    serde_json::json!({
        "facultyName": "Faculty of ICT",
        "className": "IT2A",
        "weekOfReporting": 3,
        "dateOfLecture": "2025-09-15",
        "courseName": "Web Application Development",
        "courseCode": course_code,
        "lecturerName": "Dr. John Smith",
        "actualStudentsPresent": present,
        "totalRegisteredStudents": registered,
        "venue": "Lab 301",
        "scheduledTime": "14:00",
        "topicTaught": "REST APIs",
        "learningOutcomes": "Design resource endpoints",
        "recommendations": "More lab time"
    })
}

/// Submit a report through the API and return its id.
pub async fn submit_report(app: &Router, course_code: &str, present: i64, registered: i64) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/reports",
        report_body(course_code, present, registered),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["reportId"].as_i64().unwrap()
}

/// Register a student through the API and return its id.
pub async fn register_student(app: &Router, email: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/students/register",
        serde_json::json!({ "email": email, "password": "pw123", "name": "Test Student" }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["userId"].as_i64().unwrap()
}
