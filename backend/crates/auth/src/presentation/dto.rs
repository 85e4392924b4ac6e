//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that a missing field is a validation error
//! rather than a body rejection. Responses whitelist what may leave the API.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::User;

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(rename = "access_token")]
    pub access_token: String,
    pub user_name: String,
    /// `"admin"` or `"user"`
    pub user_role: String,
    pub user_id: UserId,
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `GET /users?id=&username=`. `id` stays textual so that a non-numeric or
/// zero value behaves like an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
    pub username: Option<String>,
}

impl UserQuery {
    pub fn user_id(&self) -> Option<UserId> {
        self.id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .filter(|id| *id > 0)
            .map(UserId::from_i32)
    }
}

/// Public view of a user. Never carries the password hash or the admin flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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
