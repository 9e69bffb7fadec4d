mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn root_returns_greeting() {
    let app = common::test_app().await;
    let (status, body) = common::get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, world!");
}

#[tokio::test]
async fn health_reports_database_connected() {
    let app = common::test_app().await;
    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::test_app().await;
    let (status, _body) = common::get(&app, "/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
