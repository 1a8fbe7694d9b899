//! Test fixtures for the booking API tests
//!
//! Builds the real router over a named in-memory SQLite database, so the
//! integration tests exercise the same code paths as production.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use showroom_api::auth::VERIFIED_EMAIL_HEADER;
use showroom_api::routes::routes;
use showroom_config::{AdminConfig, AppConfig};
use showroom_db::{DbClient, ReservationRepository, SqlReservationRepository};
use std::sync::Arc;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const VISITOR_EMAIL: &str = "visitor@example.com";

/// An AppConfig with the default showroom hours and a fixture allow-list.
pub fn test_app_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        admin: AdminConfig {
            emails: vec![ADMIN_EMAIL.to_string()],
        },
        ..AppConfig::default()
    })
}

/// The full router backed by its own shared-cache memory database.
pub async fn test_router(db_name: &str) -> Router {
    let url = format!("sqlite:file:{db_name}?mode=memory&cache=shared");
    let client = DbClient::from_url(&url).await.expect("pool");
    let repo = SqlReservationRepository::new(client);
    repo.init_schema().await.expect("schema");
    routes(test_app_config(), repo).expect("router")
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_as(router: &Router, uri: &str, email: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(VERIFIED_EMAIL_HEADER, email)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    email: Option<&str>,
    body: &Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(email) = email {
        builder = builder.header(VERIFIED_EMAIL_HEADER, email);
    }
    router
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn delete_as(router: &Router, uri: &str, email: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .header(VERIFIED_EMAIL_HEADER, email)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
