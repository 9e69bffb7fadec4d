mod games;
mod health;
mod users;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /`: greeting
/// - `GET /health`: health check with database connectivity
/// - `/users/...`: registration, profile maintenance, login
/// - `/games/{userId}/...`: a user's game library
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(health::router())
        .merge(users::router())
        .merge(games::router())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, world!" }))
}
