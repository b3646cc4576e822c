//! Integration tests for system endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

async fn healthcheck_request(app: axum::Router) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .uri("/healthcheck")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn healthcheck_returns_alive() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    let app = routes::create_router(AppState::new(db));

    let response = healthcheck_request(app).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"message": "alive"}));
}

#[tokio::test]
async fn healthcheck_ignores_closed_database() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    let state = AppState::new(db);
    let app = routes::create_router(state.clone());
    state.db().close().await;

    let response = healthcheck_request(app).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn docs_are_served() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    let app = routes::create_router(AppState::new(db));

    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn openapi_documents_every_endpoint() {
    use utoipa::OpenApi;

    let doc = routes::ApiDoc::openapi();
    let paths: Vec<&String> = doc.paths.paths.keys().collect();

    for expected in ["/healthcheck", "/todos", "/todos/add"] {
        assert!(
            paths.iter().any(|p| p.as_str() == expected),
            "Missing path {} in {:?}",
            expected,
            paths
        );
    }
}
