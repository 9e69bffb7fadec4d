pub mod game;
pub mod user;

pub use game::{GameRequest, GameResponse, NewGame};
pub use user::{
    CreateUserRequest, LoginRequest, UpdateUserRequest, UserIdentity, UserRecord, UserSummary,
};

use serde::Serialize;

/// Body of responses that only carry a confirmation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Treat an empty string the same as an absent field.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Treat a zero (or NaN) rating the same as an absent field.
#[must_use]
pub fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some(" ".to_string())), Some(" ".to_string()));
        assert_eq!(non_empty(Some("PC".to_string())), Some("PC".to_string()));
    }

    #[test]
    fn test_non_zero() {
        assert_eq!(non_zero(None), None);
        assert_eq!(non_zero(Some(0.0)), None);
        assert_eq!(non_zero(Some(-0.0)), None);
        assert_eq!(non_zero(Some(f64::NAN)), None);
        assert_eq!(non_zero(Some(4.5)), Some(4.5));
        assert_eq!(non_zero(Some(-1.0)), Some(-1.0));
    }
}
