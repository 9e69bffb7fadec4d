use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::dto::{
    CreateUserRequest, LoginRequest, MessageResponse, UpdateUserRequest, UserIdentity, UserRecord,
    UserSummary,
};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Build the user route group: `/users/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/login", post(login))
        .route("/users/{id}", put(update_user).delete(delete_user))
}

/// `GET /users`
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(state.users.list().await?))
}

/// `POST /users`
async fn create_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserIdentity>), AppError> {
    let created = state.users.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /users/{id}`
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.users.delete(&id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// `PUT /users/{id}`
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateUserRequest>,
) -> Result<Json<UserRecord>, AppError> {
    Ok(Json(state.users.update(&id, body).await?))
}

/// `POST /users/login`
async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Json<UserIdentity>, AppError> {
    Ok(Json(state.users.authenticate(body).await?))
}
