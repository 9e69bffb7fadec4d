use serde::{Deserialize, Serialize};

use super::{non_empty, non_zero};
use crate::entities::games;

// ============ Request DTOs ============

/// Body of POST /games/{userId} and PUT /games/{userId}/{gameId}.
///
/// Creation requires every field; updates accept any subset.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GameRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub platform: Option<String>,
    pub rating: Option<f64>,
}

/// A fully populated game ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub image: String,
    pub description: String,
    pub platform: String,
    pub rating: f64,
}

impl GameRequest {
    /// Require every field to be present and truthy.
    ///
    /// Empty strings and a rating of `0` count as missing.
    #[must_use]
    pub fn into_new_game(self) -> Option<NewGame> {
        Some(NewGame {
            name: non_empty(self.name)?,
            image: non_empty(self.image)?,
            description: non_empty(self.description)?,
            platform: non_empty(self.platform)?,
            rating: non_zero(self.rating)?,
        })
    }

    /// Overlay the supplied fields on a stored game. Missing or falsy fields keep
    /// the stored value.
    #[must_use]
    pub fn merge_into(self, current: &games::Model) -> NewGame {
        NewGame {
            name: non_empty(self.name).unwrap_or_else(|| current.name.clone()),
            image: non_empty(self.image).unwrap_or_else(|| current.image.clone()),
            description: non_empty(self.description)
                .unwrap_or_else(|| current.description.clone()),
            platform: non_empty(self.platform).unwrap_or_else(|| current.platform.clone()),
            rating: non_zero(self.rating).unwrap_or(current.rating),
        }
    }
}

// ============ Response DTOs ============

/// A game record followed by a confirmation message.
#[derive(Debug, Serialize)]
pub struct GameResponse {
    #[serde(flatten)]
    pub game: games::Model,
    pub message: String,
}

impl GameResponse {
    pub fn new(game: games::Model, message: impl Into<String>) -> Self {
        Self {
            game,
            message: message.into(),
        }
    }
}
