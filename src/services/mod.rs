pub mod game_service;
pub mod user_service;

pub use game_service::GameService;
pub use user_service::UserService;

use anyhow::Context;
use sea_orm::{DbErr, SqlErr};

use crate::error::AppError;

pub(crate) const MISSING_FIELDS: &str = "Missing required fields";
pub(crate) const USER_NOT_FOUND: &str = "User not found";

/// Parse a path identifier.
///
/// A malformed identifier is a failed lookup, not a validation failure, so it
/// surfaces as an internal error.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    let id = raw
        .parse::<i32>()
        .with_context(|| format!("invalid identifier {raw:?}"))?;
    Ok(id)
}

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

/// A write rejected by a unique index becomes a conflict; anything else is internal.
pub(crate) fn conflict_on_unique(err: DbErr, message: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(message.to_string())
    } else {
        AppError::from(err)
    }
}

/// A write rejected by a foreign key becomes a missing referent; anything else is internal.
pub(crate) fn not_found_on_foreign_key(err: DbErr, message: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::NotFound(message.to_string())
    } else {
        AppError::from(err)
    }
}
