#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

use game_library_api::config::{Config, Environment};
use game_library_api::state::AppState;

/// Build the app router backed by an in-memory `SQLite` database with migrations.
///
/// Returns the database handle too so tests can inspect rows directly.
pub async fn test_app_with(expose_password_hash: bool) -> (Router, DatabaseConnection) {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();

    Migrator::up(&db, None).await.unwrap_or_default();

    let config = Config {
        database_url: String::new(),
        server_host: std::net::IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        frontend_url: "http://localhost:3001".to_string(),
        db_max_connections: 1,
        db_min_connections: 1,
        expose_password_hash,
    };

    let state = AppState::new(db.clone(), config);
    (game_library_api::routes::router().with_state(state), db)
}

pub async fn test_app() -> Router {
    test_app_with(true).await.0
}

/// Send a request and return (status, parsed JSON body). Non-JSON bodies parse to `Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap_or_default();

    collect(app, request).await
}

async fn collect(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Send a raw body with an optional content type, bypassing JSON encoding.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .unwrap_or_default();

    collect(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Register a user and return its id.
pub async fn create_user(app: &Router, username: &str, email: &str, password: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/users",
        &serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create user failed: {body}");
    body["id"].as_i64().unwrap_or_default()
}

/// Save a game for a user and return its id.
pub async fn create_game(app: &Router, user_id: i64, name: &str, rating: f64) -> i64 {
    let (status, body) = post_json(
        app,
        &format!("/games/{user_id}"),
        &serde_json::json!({
            "name": name,
            "image": format!("{name}.jpg"),
            "description": format!("About {name}"),
            "platform": "PC",
            "rating": rating,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create game failed: {body}");
    body["id"].as_i64().unwrap_or_default()
}
