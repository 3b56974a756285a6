//! User DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserId};

/// Request body for `POST /api/users`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name, non-empty.
    pub name: String,
    /// Email address, unique across all users.
    pub email: String,
}

/// User representation returned by the user endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
