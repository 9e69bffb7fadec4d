use serde::{Deserialize, Serialize};

use crate::entities::users;

// ============ Request DTOs ============

/// POST /users
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// PUT /users/{id}: every field is optional
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /users/login
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============ Response DTOs ============

/// Entry of the user listing.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
    /// Stored password hash, present only while hash exposure is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserSummary {
    #[must_use]
    pub fn from_model(user: users::Model, expose_hash: bool) -> Self {
        Self {
            username: user.username,
            email: user.email,
            password: expose_hash.then_some(user.password),
        }
    }
}

/// Identity payload returned on registration and login.
///
/// Never carries the password or its hash.
#[derive(Debug, Serialize)]
pub struct UserIdentity {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub message: String,
}

impl UserIdentity {
    pub fn new(user: users::Model, message: impl Into<String>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            message: message.into(),
        }
    }
}

/// Full user row as returned after an update.
#[derive(Debug, Serialize)]
pub struct UserRecord {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserRecord {
    #[must_use]
    pub fn from_model(user: users::Model, expose_hash: bool) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            password: expose_hash.then_some(user.password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> users::Model {
        users::Model {
            id: 7,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$argon2id$hash".to_string(),
        }
    }

    #[test]
    fn test_identity_never_contains_hash() {
        let json = serde_json::to_value(UserIdentity::new(sample(), "ok")).unwrap_or_default();
        assert_eq!(json["id"], 7);
        assert_eq!(json["message"], "ok");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_record_hash_follows_flag() {
        let exposed = serde_json::to_value(UserRecord::from_model(sample(), true)).unwrap_or_default();
        assert_eq!(exposed["password"], "$argon2id$hash");

        let hidden = serde_json::to_value(UserRecord::from_model(sample(), false)).unwrap_or_default();
        assert!(hidden.get("password").is_none());
        assert_eq!(hidden["email"], "ada@example.com");
    }

    #[test]
    fn test_summary_has_no_id() {
        let json = serde_json::to_value(UserSummary::from_model(sample(), true)).unwrap_or_default();
        assert!(json.get("id").is_none());
        assert_eq!(json["username"], "ada");
    }
}
