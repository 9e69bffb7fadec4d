use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::services::{GameService, UserService};

/// Shared application state available to all request handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub users: UserService,
    pub games: GameService,
}

impl AppState {
    /// Wire the services to a single store connection.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let users = UserService::new(db.clone(), config.expose_password_hash);
        let games = GameService::new(db.clone());
        Self {
            db,
            config,
            users,
            games,
        }
    }
}
