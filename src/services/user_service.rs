use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::{MISSING_FIELDS, USER_NOT_FOUND, conflict_on_unique, parse_id};
use crate::auth::password;
use crate::dto::{
    CreateUserRequest, LoginRequest, UpdateUserRequest, UserIdentity, UserRecord, UserSummary,
    non_empty,
};
use crate::entities::users;
use crate::error::AppError;

const EMAIL_EXISTS: &str = "User with this email already exists";
const EMAIL_IN_USE: &str = "Email is already in use by another user";

/// Registration, profile maintenance and login over the `users` table.
#[derive(Debug, Clone)]
pub struct UserService {
    db: DatabaseConnection,
    expose_password_hash: bool,
}

impl UserService {
    #[must_use]
    pub const fn new(db: DatabaseConnection, expose_password_hash: bool) -> Self {
        Self {
            db,
            expose_password_hash,
        }
    }

    /// List every user.
    pub async fn list(&self) -> Result<Vec<UserSummary>, AppError> {
        let users = users::Entity::find().all(&self.db).await?;

        Ok(users
            .into_iter()
            .map(|user| UserSummary::from_model(user, self.expose_password_hash))
            .collect())
    }

    /// Register a new user.
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserIdentity, AppError> {
        let (Some(username), Some(email), Some(plain)) = (
            non_empty(request.username),
            non_empty(request.email),
            non_empty(request.password),
        ) else {
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        };

        if self.find_by_email(&email).await?.is_some() {
            tracing::debug!("registration rejected: email exists");
            return Err(AppError::Conflict(EMAIL_EXISTS.to_string()));
        }

        let password_hash = password::hash_password(&plain)?;

        let user = users::ActiveModel {
            username: Set(username),
            email: Set(email),
            password: Set(password_hash),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        // Lost a race against a concurrent registration
        .map_err(|err| conflict_on_unique(err, EMAIL_EXISTS))?;

        tracing::info!(user_id = user.id, "user created");

        Ok(UserIdentity::new(user, "User created successfully"))
    }

    /// Delete a user. Their games go with them.
    pub async fn delete(&self, raw_id: &str) -> Result<(), AppError> {
        let id = parse_id(raw_id)?;

        if users::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        users::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(user_id = id, "user deleted");

        Ok(())
    }

    /// Update any subset of username, email and password.
    ///
    /// Absent or empty fields keep their stored value; a new password is re-hashed.
    pub async fn update(
        &self,
        raw_id: &str,
        request: UpdateUserRequest,
    ) -> Result<UserRecord, AppError> {
        let id = parse_id(raw_id)?;

        let existing = users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let email = non_empty(request.email);
        if let Some(email) = &email {
            let taken = users::Entity::find()
                .filter(users::Column::Email.eq(email.as_str()))
                .filter(users::Column::Id.ne(id))
                .one(&self.db)
                .await?;
            if taken.is_some() {
                tracing::debug!(user_id = id, "update rejected: email in use");
                return Err(AppError::Conflict(EMAIL_IN_USE.to_string()));
            }
        }

        let password_hash = match non_empty(request.password) {
            Some(plain) => password::hash_password(&plain)?,
            None => existing.password.clone(),
        };
        let username = non_empty(request.username).unwrap_or_else(|| existing.username.clone());
        let email = email.unwrap_or_else(|| existing.email.clone());

        let mut active: users::ActiveModel = existing.into();
        active.username = Set(username);
        active.email = Set(email);
        active.password = Set(password_hash);

        let updated = active
            .update(&self.db)
            .await
            .map_err(|err| conflict_on_unique(err, EMAIL_IN_USE))?;

        tracing::info!(user_id = id, "user updated");

        Ok(UserRecord::from_model(updated, self.expose_password_hash))
    }

    /// Check credentials and hand back the caller's identity.
    ///
    /// No token is issued; the client keeps the returned payload.
    pub async fn authenticate(&self, request: LoginRequest) -> Result<UserIdentity, AppError> {
        let (Some(email), Some(plain)) = (non_empty(request.email), non_empty(request.password))
        else {
            return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
        };

        let user = self
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        if !password::verify_password(&plain, &user.password)? {
            tracing::warn!(user_id = user.id, "login failed: invalid credentials");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        tracing::info!(user_id = user.id, "user logged in");

        Ok(UserIdentity::new(user, "Login successful"))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, AppError> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use migration::{Migrator, MigratorTrait};

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut inner) = self.0.lock() {
                inner.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            self.0
                .lock()
                .map(|inner| String::from_utf8_lossy(&inner).into_owned())
                .unwrap_or_default()
        }
    }

    fn signup(username: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some("hunter22".to_string()),
        }
    }

    #[tokio::test]
    async fn test_rejected_email_is_not_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let db = sea_orm::Database::connect("sqlite::memory:")
            .await
            .unwrap_or_default();
        Migrator::up(&db, None).await.unwrap_or_default();
        let service = UserService::new(db, true);

        let first = service
            .create(signup("taken", "secret.owner@example.com"))
            .await;
        let second = service
            .create(signup("other", "second.owner@example.com"))
            .await;
        let second_id = second.map(|identity| identity.id.to_string()).unwrap_or_default();
        assert!(first.is_ok());

        let duplicate = service
            .create(signup("copycat", "secret.owner@example.com"))
            .await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        let clash = service
            .update(
                &second_id,
                UpdateUserRequest {
                    email: Some("secret.owner@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(clash, Err(AppError::Conflict(_))));

        let output = logs.contents();
        assert!(output.contains("registration rejected"));
        assert!(output.contains("update rejected"));
        assert!(!output.contains("secret.owner@example.com"));
        assert!(!output.contains("hunter22"));
    }
}
