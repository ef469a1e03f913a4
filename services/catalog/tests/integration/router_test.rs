use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};

use moviestream_catalog::domain::password::hash_password;
use moviestream_catalog::router::build_router;
use moviestream_catalog_schema::users;
use moviestream_testing::auth::MockAuth;

use crate::helpers::{disconnected_state, failing_storage_state, mock_db_state};

fn server() -> TestServer {
    TestServer::new(build_router(disconnected_state())).unwrap()
}

fn bearer(auth: &MockAuth) -> (HeaderName, HeaderValue) {
    (AUTHORIZATION, auth.bearer())
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_live() {
    let resp = server().get("/healthz").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let resp = server().get("/readyz").await;
    assert_eq!(resp.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_attach_request_id() {
    let resp = server().get("/healthz").await;
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_propagate_caller_request_id() {
    let resp = server()
        .get("/healthz")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-123"),
        )
        .await;
    assert_eq!(resp.headers()["x-request-id"], "req-123");
}

// ── Auth ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_protected_route_without_token() {
    let resp = server().get("/movie/tt0111161").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "MISSING_TOKEN");
}

#[tokio::test]
async fn should_reject_tampered_token() {
    let resp = server()
        .get("/recommendedmovies")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_TOKEN");
}

#[tokio::test]
async fn should_forbid_review_update_for_non_admin() {
    let (name, value) = bearer(&MockAuth::user("u-1"));
    let resp = server()
        .patch("/updatereview/tt0111161")
        .add_header(name, value)
        .json(&json!({ "admin_review": "great" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::FORBIDDEN);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_reject_review_update_without_role() {
    let (name, value) = bearer(&MockAuth::new("u-1", ""));
    let resp = server()
        .patch("/updatereview/tt0111161")
        .add_header(name, value)
        .json(&json!({ "admin_review": "great" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_accept_token_from_cookie() {
    // No role in the token: the request passes authentication and stops at
    // the role check, before any storage access.
    let resp = server()
        .patch("/updatereview/tt0111161")
        .add_header(COOKIE, MockAuth::new("u-1", "").cookie_header())
        .json(&json!({ "admin_review": "great" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_require_user_id_for_recommendations() {
    let (name, value) = bearer(&MockAuth::new("", "USER"));
    let resp = server()
        .get("/recommendedmovies")
        .add_header(name, value)
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "MISSING_USER_ID");
}

// ── Request bodies ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_malformed_movie_body() {
    let (name, value) = bearer(&MockAuth::admin("u-1"));
    let resp = server()
        .post("/addmovie")
        .add_header(name, value)
        .json(&json!({ "imdb_id": 42 }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_BODY");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn should_report_validation_failures_before_storage() {
    let (name, value) = bearer(&MockAuth::user("u-1"));
    let resp = server()
        .post("/addmovie")
        .add_header(name, value)
        .json(&json!({
            "imdb_id": "tt0111161",
            "title": "S",
            "poster_path": "not-a-url",
            "youtube_id": "abc",
            "genre": [{ "genre_id": 2, "genre_name": "Drama" }],
            "ranking": { "ranking_name": "Not_Ranked", "ranking_value": 999 }
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("title"), "{details}");
    assert!(details.contains("poster_path"), "{details}");
}

#[tokio::test]
async fn should_return_internal_error_when_storage_is_down() {
    let server = TestServer::new(build_router(failing_storage_state())).unwrap();
    let resp = server.get("/genres").await;
    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["error"], "internal server error");
    assert!(body.get("details").is_none());
}

// ── Session ──────────────────────────────────────────────────────────────────

fn stored_user(password: &str) -> users::Model {
    users::Model {
        user_id: "u-42".into(),
        email: "grace@example.com".into(),
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        role: "USER".into(),
        favourite_genres: json!([{ "genre_id": 6, "genre_name": "Sci-Fi" }]),
        password_hash: hash_password(password).unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn server_with_user(password: &str) -> TestServer {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_user(password)]]);
    TestServer::new(build_router(mock_db_state(db))).unwrap()
}

#[tokio::test]
async fn should_login_and_set_token_cookies() {
    let resp = server_with_user("s3cret!")
        .post("/login")
        .json(&json!({ "email": "grace@example.com", "password": "s3cret!" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let cookies: Vec<&str> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("access_token=")));
    assert!(cookies.iter().any(|c| c.starts_with("refresh_token=")));
    assert!(cookies.iter().all(|c| c.contains("HttpOnly")));

    let body: Value = resp.json();
    assert_eq!(body["user_id"], "u-42");
    assert_eq!(body["role"], "USER");
    assert_eq!(body["favourite_genres"][0]["genre_name"], "Sci-Fi");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn should_reject_login_with_wrong_password() {
    let resp = server_with_user("s3cret!")
        .post("/login")
        .json(&json!({ "email": "grace@example.com", "password": "nope" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(SET_COOKIE).is_none());
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn should_validate_registration_before_storage() {
    let resp = server()
        .post("/register")
        .json(&json!({
            "first_name": "G",
            "last_name": "Hopper",
            "email": "grace",
            "password": "cobol-1959"
        }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("first_name"), "{details}");
    assert!(details.contains("email"), "{details}");
}

#[tokio::test]
async fn should_reject_login_without_password_field() {
    let resp = server()
        .post("/login")
        .json(&json!({ "email": "grace@example.com" }))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_reject_refresh_without_cookie() {
    let resp = server().post("/refresh").await;
    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_REFRESH_TOKEN");
}

#[tokio::test]
async fn should_clear_cookies_on_logout() {
    let resp = server().post("/logout").await;
    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);
    let cookies: Vec<&str> = resp
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("access_token=")));
    assert!(cookies.iter().any(|c| c.starts_with("refresh_token=")));
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}
