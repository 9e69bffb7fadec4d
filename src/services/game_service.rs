use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::{MISSING_FIELDS, USER_NOT_FOUND, not_found_on_foreign_key, parse_id};
use crate::dto::{GameRequest, NewGame};
use crate::entities::{games, users};
use crate::error::AppError;

const GAME_NOT_FOUND: &str = "Game not found";
const NOT_OWNER: &str = "Unauthorized - Game does not belong to the user";

/// Per-user game library over the `games` table.
#[derive(Debug, Clone)]
pub struct GameService {
    db: DatabaseConnection,
}

impl GameService {
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All games owned by a user, in store order.
    pub async fn list(&self, raw_user_id: &str) -> Result<Vec<games::Model>, AppError> {
        let user_id = self.require_user(raw_user_id).await?;

        let games = games::Entity::find()
            .filter(games::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;

        Ok(games)
    }

    /// Save a game to a user's library.
    pub async fn create(
        &self,
        raw_user_id: &str,
        request: GameRequest,
    ) -> Result<games::Model, AppError> {
        let new_game = request
            .into_new_game()
            .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS.to_string()))?;

        let user_id = self.require_user(raw_user_id).await?;

        let NewGame {
            name,
            image,
            description,
            platform,
            rating,
        } = new_game;

        let game = games::ActiveModel {
            user_id: Set(user_id),
            name: Set(name),
            image: Set(image),
            description: Set(description),
            platform: Set(platform),
            rating: Set(rating),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        // Owner removed between the lookup and the insert
        .map_err(|err| not_found_on_foreign_key(err, USER_NOT_FOUND))?;

        tracing::info!(user_id, game_id = game.id, "game saved");

        Ok(game)
    }

    /// Partially update a game owned by the user.
    pub async fn update(
        &self,
        raw_user_id: &str,
        raw_game_id: &str,
        request: GameRequest,
    ) -> Result<games::Model, AppError> {
        let current = self.owned_game(raw_user_id, raw_game_id).await?;
        let game_id = current.id;

        let NewGame {
            name,
            image,
            description,
            platform,
            rating,
        } = request.merge_into(&current);

        let mut active: games::ActiveModel = current.into();
        active.name = Set(name);
        active.image = Set(image);
        active.description = Set(description);
        active.platform = Set(platform);
        active.rating = Set(rating);

        let updated = active.update(&self.db).await?;

        tracing::info!(user_id = updated.user_id, game_id, "game updated");

        Ok(updated)
    }

    /// Remove a game owned by the user.
    pub async fn delete(&self, raw_user_id: &str, raw_game_id: &str) -> Result<(), AppError> {
        let game = self.owned_game(raw_user_id, raw_game_id).await?;

        games::Entity::delete_by_id(game.id).exec(&self.db).await?;

        tracing::info!(user_id = game.user_id, game_id = game.id, "game deleted");

        Ok(())
    }

    /// Resolve the user id and make sure the user exists.
    async fn require_user(&self, raw_user_id: &str) -> Result<i32, AppError> {
        let user_id = parse_id(raw_user_id)?;

        if users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(user_id)
    }

    /// Existence checks for user and game, then the ownership check.
    async fn owned_game(
        &self,
        raw_user_id: &str,
        raw_game_id: &str,
    ) -> Result<games::Model, AppError> {
        let user_id = self.require_user(raw_user_id).await?;
        let game_id = parse_id(raw_game_id)?;

        let game = games::Entity::find_by_id(game_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(GAME_NOT_FOUND.to_string()))?;

        if game.user_id != user_id {
            tracing::warn!(user_id, game_id, owner_id = game.user_id, "game ownership mismatch");
            return Err(AppError::Forbidden(NOT_OWNER.to_string()));
        }

        Ok(game)
    }
}
