//! User entity.

use chrono::{DateTime, Utc};

use super::id::UserId;
use crate::error::ApiError;

/// A registered user who can book seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across all users.
    pub email: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Validated input for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name, non-empty.
    pub name: String,
    /// Email address, non-empty. Uniqueness is enforced by the store.
    pub email: String,
}

impl NewUser {
    /// Validates the raw fields of a user-registration request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when either field is empty after
    /// trimming.
    pub fn new(name: String, email: String) -> Result<Self, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("user name must not be empty".to_string()));
        }
        if email.trim().is_empty() {
            return Err(ApiError::Validation("email must not be empty".to_string()));
        }
        Ok(Self { name, email })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        assert!(NewUser::new(String::new(), "a@x.com".to_string()).is_err());
    }

    #[test]
    fn rejects_empty_email() {
        assert!(NewUser::new("Ada".to_string(), "  ".to_string()).is_err());
    }

    #[test]
    fn accepts_valid_input() {
        let Ok(user) = NewUser::new("Ada".to_string(), "a@x.com".to_string()) else {
            panic!("expected valid user");
        };
        assert_eq!(user.email, "a@x.com");
    }
}
