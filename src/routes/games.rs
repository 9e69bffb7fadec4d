use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::dto::{GameRequest, GameResponse, MessageResponse};
use crate::entities::games;
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Game library router. Every route is scoped by the owning user's id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games/{user_id}", get(list_games).post(save_game))
        .route(
            "/games/{user_id}/{game_id}",
            put(update_game).delete(delete_game),
        )
}

/// `GET /games/{user_id}`
async fn list_games(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<games::Model>>, AppError> {
    Ok(Json(state.games.list(&user_id).await?))
}

/// `POST /games/{user_id}`
async fn save_game(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(body): AppJson<GameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    let game = state.games.create(&user_id, body).await?;
    Ok((
        StatusCode::CREATED,
        Json(GameResponse::new(game, "Game saved successfully")),
    ))
}

/// `PUT /games/{user_id}/{game_id}`
async fn update_game(
    State(state): State<AppState>,
    Path((user_id, game_id)): Path<(String, String)>,
    AppJson(body): AppJson<GameRequest>,
) -> Result<Json<GameResponse>, AppError> {
    let game = state.games.update(&user_id, &game_id, body).await?;
    Ok(Json(GameResponse::new(game, "Game updated successfully")))
}

/// `DELETE /games/{user_id}/{game_id}`
async fn delete_game(
    State(state): State<AppState>,
    Path((user_id, game_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    state.games.delete(&user_id, &game_id).await?;
    Ok(Json(MessageResponse::new("Game deleted successfully")))
}
